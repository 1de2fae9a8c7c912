pub mod card;
pub mod flatten;
pub mod record;
pub mod render;
pub mod resolve;
pub mod service;

pub use card::{CardData, CardDefinition, HanjaComponent};
pub use flatten::{FlattenOptions, flatten};
pub use record::LexicalRecord;
pub use render::{CardRenderer, HandlebarsRenderer, RenderError};
pub use resolve::{PagingPolicy, Selector, resolve};
pub use service::{DictionaryService, RecordId, ServiceError};
