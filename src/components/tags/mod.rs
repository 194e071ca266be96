mod add_sub_tag_modal;
mod breadcrumbs;
mod placeholders;
mod sub_tags;

pub use add_sub_tag_modal::AddSubTagModal;
pub use breadcrumbs::Breadcrumbs;
pub use placeholders::ExternalScreen;
pub use sub_tags::SubTags;
