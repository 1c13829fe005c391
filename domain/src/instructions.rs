//! Instruction templates sent to the oracle.
//!
//! The wording here is part of the product: the theory instruction steers
//! the model toward piano defaults and sharp spellings, and the tutor
//! persona sets the register for chat answers. Change it deliberately.

/// System instruction for the tutor chat session
pub const TUTOR_PERSONA: &str = "You are a helpful and knowledgeable music theory tutor. \
     Explain concepts clearly. You can use markdown for formatting.";

/// Build the one-shot instruction for a theory visualization query.
///
/// Embeds the user's request verbatim and adds the two steering rules:
/// default the instrument to piano, and prefer sharp spellings when a
/// note name is ambiguous.
pub fn theory_instruction(request: &str) -> String {
    format!(
        "Generate music theory visualization data for the user request: \"{request}\". \
         If the user does not specify an instrument, default to piano. \
         Ensure note names are consistent (use sharps for simplicity if ambiguous)."
    )
}
