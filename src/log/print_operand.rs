use std::{
    any::Any,
    fmt::{Display, Write as _},
};

/// A value accepted by [`LevelLogger::print`](super::LevelLogger::print).
///
/// Implemented for every `'static` `Display` type; the `Any` view lets the
/// joiner tell string operands apart from everything else.
pub trait PrintOperand: Display + Any {
    fn as_any(&self) -> &dyn Any;
}

impl<T: Display + Any> PrintOperand for T {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

fn is_string(op: &dyn PrintOperand) -> bool {
    let any = <dyn PrintOperand as PrintOperand>::as_any(op);
    any.is::<&str>() || any.is::<String>()
}

/// Concatenates `values`, adding a space between two neighbours only when
/// neither of them is a string.
#[must_use]
pub fn join_operands(values: &[&dyn PrintOperand]) -> String {
    let mut text = String::new();
    let mut prev_is_string: Option<bool> = None;
    for &value in values {
        let this_is_string = is_string(value);
        if prev_is_string.is_some_and(|prev| !prev && !this_is_string) {
            text.push(' ');
        }
        let _ = write!(text, "{value}");
        prev_is_string = Some(this_is_string);
    }
    text
}
