use leptos::prelude::*;

use crate::shared::components::submit_form::SubmitForm;
use crate::shared::config::{required, ConfigError};
use crate::shared::form_submit::{AfterSuccess, FormSubmitVm, PageForm, SubmitMethod, SuccessMessage};
use crate::shared::services::ConsoleServices;

pub fn profile_form(services: &ConsoleServices) -> Result<PageForm, ConfigError> {
    Ok(PageForm {
        vm: FormSubmitVm::new(
            services.clone(),
            SubmitMethod::Put,
            SuccessMessage::FromServer,
            AfterSuccess::StayInPlace,
        ),
        action: required(&services.config.endpoints.profile_endpoint, "profile_endpoint")?,
    })
}

#[component]
pub fn ProfilePage(form: PageForm) -> impl IntoView {
    view! {
        <div class="card">
            <h4 class="card-title">"Profile"</h4>
            <SubmitForm vm=form.vm action=Signal::stored(Some(form.action)) submit_label="Update">
                <div class="form-group">
                    <label for="name">"Name"</label>
                    <input type="text" id="name" name="name" required />
                </div>
                <div class="form-group">
                    <label for="email">"Email"</label>
                    <input type="email" id="email" name="email" required />
                </div>
                <div class="form-group">
                    <label for="password">"New Password"</label>
                    <input type="password" id="password" name="password" autocomplete="new-password" />
                </div>
            </SubmitForm>
        </div>
    }
}
