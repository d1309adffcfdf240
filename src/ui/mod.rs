pub mod panel;

pub use panel::{FooterPanel, PANEL_WIDTH};
