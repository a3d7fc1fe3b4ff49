//! Connected-region segmentation over labeled grids.
//!
//! [`segment`] partitions a [`Grid`](regrid_core::Grid) into maximal
//! 4-connected regions of equal labels. Each [`Region`] then reports its
//! area (cell count), perimeter (unit boundary edges) and sides (maximal
//! straight boundary runs). [`regions_with_data`] runs both steps and
//! returns one [`AreaData`] per region.
//!
//! A label may own several regions when its cells are not connected.
//! Boundary faces are recomputed on every call; nothing is cached on the
//! grid, so repeated analyses of the same grid agree.

mod borders;
pub mod polygon;
mod region;
mod segment;

pub use borders::{Bordered, Borders};
pub use region::{AreaData, Region};
pub use segment::{find_regions, regions_with_data, segment};
