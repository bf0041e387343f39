//! Read-time resolution of registered assets.
//!
//! | Module    | Purpose                                            |
//! |-----------|----------------------------------------------------|
//! | `order`   | Category concatenation order                       |
//! | `styles`  | Stylesheet + ad-hoc style resolution, compression  |
//! | `scripts` | Script include rendering                           |

mod order;
mod scripts;
mod styles;

pub use order::order_categories;
pub use scripts::render_scripts;
pub use styles::StyleResolver;
