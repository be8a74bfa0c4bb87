pub mod bus;
pub mod classification;
pub mod config;
pub mod error;
pub mod events;
pub mod handlers;
pub mod list;
pub mod registry;
pub mod restyle;
pub mod state;

pub use bus::{EventBus, Subscriber, SubscriptionId};
pub use classification::Classification;
pub use config::{ClassNames, ConfigError, ListConfig};
pub use error::ListError;
pub use events::{EventResult, ItemEvents, ListEvent};
pub use handlers::{Handler, HandlerContext, HandlerRegistry};
pub use list::{DEFAULT_ROOT_ID, SelectableList};
pub use listdom::{Element, Event, EventKind};
pub use registry::ItemRegistry;
pub use state::State;

pub mod prelude {
    pub use crate::classification::Classification;
    pub use crate::config::{ClassNames, ListConfig};
    pub use crate::error::ListError;
    pub use crate::events::{EventResult, ItemEvents, ListEvent};
    pub use crate::list::SelectableList;
    pub use listdom::{Element, Event, EventKind};
}
