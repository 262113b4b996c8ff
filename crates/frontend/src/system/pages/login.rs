use leptos::prelude::*;

use crate::shared::components::submit_form::SubmitForm;
use crate::shared::config::{required, ConfigError};
use crate::shared::form_submit::{AfterSuccess, FormSubmitVm, PageForm, SubmitMethod, SuccessMessage};
use crate::shared::services::ConsoleServices;

pub fn login_form(services: &ConsoleServices) -> Result<PageForm, ConfigError> {
    Ok(PageForm {
        vm: FormSubmitVm::new(
            services.clone(),
            SubmitMethod::Post,
            SuccessMessage::FromServer,
            AfterSuccess::ReloadNow,
        ),
        action: required(&services.config.endpoints.login_endpoint, "login_endpoint")?,
    })
}

#[component]
pub fn LoginPage(form: PageForm) -> impl IntoView {
    view! {
        <div class="auth-box">
            <h2>"Sign in"</h2>
            <SubmitForm vm=form.vm action=Signal::stored(Some(form.action)) submit_label="Login">
                <div class="form-group">
                    <label for="email">"Email"</label>
                    <input type="email" id="email" name="email" autocomplete="username" required />
                </div>
                <div class="form-group">
                    <label for="password">"Password"</label>
                    <input type="password" id="password" name="password" autocomplete="current-password" required />
                </div>
            </SubmitForm>
        </div>
    }
}
