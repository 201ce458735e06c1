//! Tab bar model shared between the components and their hosts
//!
//! Everything here is a pure function of the tab set and the current path,
//! so the decisions a tab bar makes can be checked without a browser.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use tabs_contracts::shared::tab_bar::{render_plan, resolve_redirect, HiddenTabs, TabItem};
//!
//! let items = vec![
//!     TabItem::new("overview", "Overview").root(),
//!     TabItem::new("query", "Validator stats").with_params(),
//! ];
//! let hidden = HiddenTabs::default();
//!
//! for tab in render_plan("/staking", &items, &hidden, false) {
//!     println!("{} -> {} ({:?})", tab.text, tab.to, tab.match_mode);
//! }
//! assert_eq!(resolve_redirect("/staking", &items, &hidden, "/staking/nope"), Some("/staking".into()));
//! ```

mod classes;
mod config;
mod item;
mod match_mode;
mod redirect;
mod render_plan;
mod validation;

pub use classes::join_classes;
pub use config::TabSetConfig;
pub use item::{HiddenTabs, TabItem};
pub use match_mode::{is_link_active, match_mode, MatchMode};
pub use redirect::{resolve_redirect, section_of};
pub use render_plan::{render_plan, visible_items, RenderedTab};
pub use validation::{validate_tab_set, TabSetError};
