use std::fmt::{Debug, Formatter, Result};

/// Debug-formats a value by calling the wrapped closure.
pub struct FormatDebugWith<F>(pub F)
where
    F: Fn(&mut Formatter<'_>) -> Result;

impl<F> Debug for FormatDebugWith<F>
where
    F: Fn(&mut Formatter<'_>) -> Result,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        (self.0)(f)
    }
}

/// Debug-formats a string without quotes.
pub struct FormatDebugAs(pub String);

impl Debug for FormatDebugAs {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(&self.0)
    }
}
