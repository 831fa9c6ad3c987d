mod packing_to_svg;
mod svg_util;

#[doc(inline)]
pub use packing_to_svg::packing_to_svg;
#[doc(inline)]
pub use svg_util::{Color, SvgDrawOptions, SvgLayoutTheme, change_brightness};
