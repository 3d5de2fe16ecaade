mod attribute_editor;
mod checkbox;
mod code_snippet;
mod config_sidebar;
mod events_sidebar;
mod frame_stage;
mod page_header;

pub use attribute_editor::AttributeEditor;
pub use checkbox::Checkbox;
pub use code_snippet::CodeSnippet;
pub use config_sidebar::ConfigSidebarView;
pub use events_sidebar::EventsSidebarView;
pub use frame_stage::FrameStage;
pub use page_header::PageHeader;
