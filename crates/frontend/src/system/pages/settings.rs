use leptos::prelude::*;

use crate::shared::components::submit_form::SubmitForm;
use crate::shared::config::{required, ConfigError};
use crate::shared::form_submit::{AfterSuccess, FormSubmitVm, PageForm, SubmitMethod, SuccessMessage};
use crate::shared::services::ConsoleServices;

/// PUT settings and stay on the page.
pub fn settings_form(services: &ConsoleServices) -> Result<PageForm, ConfigError> {
    Ok(PageForm {
        vm: FormSubmitVm::new(
            services.clone(),
            SubmitMethod::Put,
            SuccessMessage::FromServer,
            AfterSuccess::StayInPlace,
        ),
        action: required(&services.config.endpoints.settings_endpoint, "settings_endpoint")?,
    })
}

#[component]
pub fn SettingsPage(form: PageForm) -> impl IntoView {
    view! {
        <div class="card">
            <h4 class="card-title">"Settings"</h4>
            <SubmitForm vm=form.vm action=Signal::stored(Some(form.action)) submit_label="Save">
                <div class="form-group">
                    <label for="app_name">"Application Name"</label>
                    <input type="text" id="app_name" name="app_name" required />
                </div>
                <div class="form-group">
                    <label for="app_url">"Application URL"</label>
                    <input type="url" id="app_url" name="app_url" required />
                </div>
                <div class="form-group">
                    <label for="app_email">"Application Email"</label>
                    <input type="email" id="app_email" name="app_email" required />
                </div>
            </SubmitForm>
        </div>
    }
}
