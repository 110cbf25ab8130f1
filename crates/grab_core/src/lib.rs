//! Grab core: domain types and the pure progress state machine.
mod dedup;
mod effect;
mod image;
mod msg;
mod page_type;
mod state;
mod update;
mod view_model;

/// Feed token that targets the aggregate front-page listing.
pub const FRONTPAGE: &str = "frontpage";

pub use dedup::DedupSet;
pub use effect::Effect;
pub use image::{
    final_path_segment, has_direct_extension, image_id_from_link, is_image_candidate,
    rewrite_link, Author, Image,
};
pub use msg::Msg;
pub use page_type::{ConfigError, PageType, TimeSpan};
pub use state::{
    feed_label, DownloadState, Phase, ProgressState, ProgressTotals, StateMessage,
};
pub use update::update;
pub use view_model::ProgressView;
