//! Shared UI components

pub mod icons;

pub use icons::{
    copy_link_root_attributes, icon_listeners, CopyLinkIcon, CopyLinkIconProps, COPY_LINK_PATH,
    COPY_LINK_VIEW_BOX, DEFAULT_ICON_SIZE, SVG_NAMESPACE,
};
