//! Strip driver adapters.

use smart_leds::SmartLedsWrite;

use crate::OutputDriver;
use crate::color::Rgb;

/// Adapter for strip drivers implementing [`SmartLedsWrite`]
///
/// Write errors are dropped: there is nowhere to report them and the next
/// frame rewrites the whole strip anyway.
pub struct SmartLedsOutput<W>(pub W);

impl<W> SmartLedsOutput<W> {
    pub fn into_inner(self) -> W {
        self.0
    }
}

impl<W> OutputDriver for SmartLedsOutput<W>
where
    W: SmartLedsWrite<Color = Rgb>,
{
    fn write(&mut self, colors: &[Rgb]) {
        let _ = self.0.write(colors.iter().copied());
    }
}
