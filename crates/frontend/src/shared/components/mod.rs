pub mod modal_frame;
pub mod pagination_controls;
pub mod submit_form;
