//! Data model types for acrylic quoting.

mod order;
mod part;
mod placement;
mod quote;
mod request;
mod sheet;

pub use order::{OrderForm, OrderItem, Sender, SurfaceTreatment};
pub use part::{PartDimension, PartName};
pub use placement::PlacedPart;
pub use quote::{PanelOption, QuoteResult, SheetSelection};
pub use request::{BoxRequest, PanelRequest};
pub use sheet::{Catalog, Sheet, StockSheet};
