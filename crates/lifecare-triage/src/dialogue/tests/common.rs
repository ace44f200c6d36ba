use crate::dialogue::instruction::{Instruction, QuickReplyOption, SummaryDisplay};
use crate::dialogue::{Conversation, Speaker};

pub(super) fn started() -> Conversation {
    let mut conversation = Conversation::new();
    conversation.start();
    conversation
}

/// Conversation sitting on the age question.
pub(super) fn in_triage() -> Conversation {
    let mut conversation = started();
    conversation.submit("mode_triage", true);
    conversation
}

/// Runs a full triage with quick-reply answers and returns the final turn's instructions.
pub(super) fn complete_triage(
    conversation: &mut Conversation,
    age: &str,
    complaint: &str,
    red_flag: &str,
    severity: &str,
) -> Vec<Instruction> {
    conversation.submit(age, true);
    conversation.submit(complaint, false);
    conversation.submit(red_flag, true);
    conversation.submit(severity, true)
}

pub(super) fn bot_messages(instructions: &[Instruction]) -> Vec<String> {
    instructions
        .iter()
        .filter_map(|instruction| match instruction {
            Instruction::ShowMessage {
                text,
                speaker: Speaker::Bot,
            } => Some(text.clone()),
            _ => None,
        })
        .collect()
}

pub(super) fn quick_replies(instructions: &[Instruction]) -> Option<Vec<QuickReplyOption>> {
    instructions.iter().rev().find_map(|instruction| match instruction {
        Instruction::SetQuickReplies { options } => Some(options.clone()),
        _ => None,
    })
}

pub(super) fn summary(instructions: &[Instruction]) -> Option<SummaryDisplay> {
    instructions.iter().rev().find_map(|instruction| match instruction {
        Instruction::SetSummaryDisplay { summary } => Some(summary.clone()),
        _ => None,
    })
}

pub(super) fn reply_values(options: &[QuickReplyOption]) -> Vec<&str> {
    options.iter().map(|option| option.value.as_str()).collect()
}
