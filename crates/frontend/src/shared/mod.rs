pub mod icons;
pub mod navigation;
pub mod settings;
pub mod tab_bar;
