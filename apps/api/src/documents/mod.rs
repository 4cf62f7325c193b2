// PDF upload pipeline: extract text, hand it to the profile formatter,
// return the formatter's message to the caller.

pub mod formatter;
pub mod handlers;
pub mod pdf;
