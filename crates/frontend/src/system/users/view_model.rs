//! Users list, editor and add/edit form wiring.

use contracts::system::users::User;

use crate::shared::config::{required, template, ConfigError};
use crate::shared::form::FormInputs;
use crate::shared::form_submit::{AfterSuccess, FormSubmitVm, PageForm, SubmitMethod, SuccessMessage};
use crate::shared::list_vm::{DeleteMessages, EditableEntity, EntityEditor, ListVm};
use crate::shared::scheduler::RELOAD_DELAY;
use crate::shared::services::ConsoleServices;

pub type UserEditor = EntityEditor<User>;
pub type UsersListVm = ListVm<User>;

impl EditableEntity for User {
    fn form_values(&self) -> FormInputs {
        let mut values = FormInputs::new();
        values.set("name", self.name.as_str());
        values.set("role", self.role.as_str());
        values.set("email", self.email.as_str());
        values
    }
}

pub fn user_editor(services: &ConsoleServices) -> Result<UserEditor, ConfigError> {
    let detail = template(&services.config.endpoints.user_endpoint, "user_endpoint")?;
    Ok(EntityEditor::new(services.clone(), detail))
}

/// `fallback` is the collection URL carried by the list root element, used
/// when the page does not configure `users_endpoint`.
pub fn users_list(
    services: &ConsoleServices,
    editor: UserEditor,
    fallback: Option<String>,
) -> Result<UsersListVm, ConfigError> {
    let endpoints = &services.config.endpoints;
    let messages = &services.config.messages;
    let collection = required(&endpoints.users_endpoint.clone().or(fallback), "users_endpoint")?;
    let delete = template(&endpoints.delete_user_endpoint, "delete_user_endpoint")?;
    Ok(ListVm::new(
        services.clone(),
        collection,
        delete,
        DeleteMessages {
            confirm: messages.delete_user_alert.clone(),
            done: messages.delete_user_message.clone(),
        },
        editor,
    ))
}

pub fn add_user_form(services: &ConsoleServices) -> Result<PageForm, ConfigError> {
    Ok(PageForm {
        vm: FormSubmitVm::new(
            services.clone(),
            SubmitMethod::Post,
            SuccessMessage::Fixed(services.config.messages.new_user.clone()),
            AfterSuccess::ReloadAfter(RELOAD_DELAY),
        ),
        action: required(&services.config.endpoints.create_user_endpoint, "create_user_endpoint")?,
    })
}

/// Submits to the editor's target URL.
pub fn edit_user_form(services: &ConsoleServices) -> FormSubmitVm {
    FormSubmitVm::new(
        services.clone(),
        SubmitMethod::Put,
        SuccessMessage::Fixed(services.config.messages.update_user_message.clone()),
        AfterSuccess::ReloadAfter(RELOAD_DELAY),
    )
}
