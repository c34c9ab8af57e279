//! Serpentine wiring of a single panel.
//!
//! The strip enters at the panel's right edge and snakes through the columns:
//! down the first physical column, up the next, and so on. Because the strip
//! enters on the right, physical column 0 is the *rightmost* logical column.
//!
//! ```text
//! 4×3 panel, logical x left-to-right, strip order by LED index:
//!
//!   x:      0    1    2    3
//!        LED11 LED6 LED5 LED0
//!        LED10 LED7 LED4 LED1
//!        LED9  LED8 LED3 LED2
//! ```

/// Serpentine wiring description for one `W`×`H` panel with reversed column
/// addressing.
///
/// Both directions of the mapping are pure and total within bounds; out of
/// bounds queries return `None` so callers can clip silently.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PanelWiring<const W: usize, const H: usize>;

impl<const W: usize, const H: usize> PanelWiring<W, H> {
    /// Total LED count of one panel.
    pub const LEN: usize = W * H;

    /// Map a panel-local logical coordinate to its position on the strip.
    ///
    /// Even physical columns run top-to-bottom, odd ones bottom-to-top.
    /// Returns `None` when `x >= W` or `y >= H`.
    #[must_use]
    pub const fn led_index(x: usize, y: usize) -> Option<usize> {
        if x >= W || y >= H {
            return None;
        }
        let real_x = W - 1 - x;
        let index = if real_x % 2 == 0 {
            real_x * H + y
        } else {
            real_x * H + (H - 1 - y)
        };
        Some(index)
    }

    /// Inverse of [`led_index`](Self::led_index): strip position back to the
    /// logical coordinate. Returns `None` when `index >= W * H`.
    #[must_use]
    pub const fn index_to_xy(index: usize) -> Option<(usize, usize)> {
        if index >= W * H {
            return None;
        }
        let real_x = index / H;
        let along_column = index % H;
        let y = if real_x % 2 == 0 {
            along_column
        } else {
            H - 1 - along_column
        };
        Some((W - 1 - real_x, y))
    }
}
