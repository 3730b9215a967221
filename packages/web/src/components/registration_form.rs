//! Pre-registration form component

use dioxus::prelude::*;
use flowt_registration::{
    Field, HttpRegistrationClient, Occupation, RegistrationConfig, RegistrationDraft,
    RegistrationError, RegistrationWorkflow, SUCCESS_NOTICE,
};

use crate::components::{Notice, NoticeBanner};

type Workflow = RegistrationWorkflow<HttpRegistrationClient>;

/// Pre-registration form wired to the registration workflow
#[component]
pub fn RegistrationForm() -> Element {
    let workflow = use_hook(build_workflow);
    let draft = use_signal(RegistrationDraft::default);
    let mut submitting = use_signal(|| false);
    let mut notice = use_signal(|| None::<Notice>);

    let workflow = match workflow {
        Ok(workflow) => workflow,
        Err(message) => {
            return rsx! {
                div { class: "notice notice-error", "{message}" }
            }
        }
    };

    let handle_submit = {
        let workflow = workflow.clone();
        let mut draft = draft;
        move |e: FormEvent| {
            e.prevent_default();

            let pending = match workflow.prepare() {
                Ok(pending) => pending,
                // The button is disabled while in flight; a stray submit is dropped.
                Err(RegistrationError::InFlight) => return,
                Err(err) => {
                    notice.set(Some(Notice::error(err.to_string())));
                    return;
                }
            };

            submitting.set(true);
            let workflow = workflow.clone();

            spawn(async move {
                let result = pending.send().await;

                draft.set(workflow.draft());
                submitting.set(false);
                notice.set(Some(match result {
                    Ok(()) => Notice::success(SUCCESS_NOTICE),
                    Err(err) => Notice::error(err.to_string()),
                }));
            });
        }
    };

    let current = draft();

    rsx! {
        form {
            id: "preregistration-form",
            class: "preregistration-form",
            onsubmit: handle_submit,

            div {
                class: "field",
                input {
                    r#type: "text",
                    id: "name",
                    placeholder: "Name",
                    value: current.name(),
                    oninput: edit_handler(&workflow, draft, Field::Name),
                    required: true
                }
            }

            div {
                class: "field",
                input {
                    r#type: "email",
                    id: "email",
                    placeholder: "Email",
                    value: current.email(),
                    oninput: edit_handler(&workflow, draft, Field::Email),
                    required: true
                }
            }

            div {
                class: "field",
                input {
                    r#type: "tel",
                    id: "phone",
                    placeholder: "Phone",
                    value: current.phone(),
                    oninput: edit_handler(&workflow, draft, Field::Phone),
                    required: true
                }
            }

            div {
                class: "field",
                select {
                    id: "occupation",
                    value: current.get(Field::Occupation),
                    onchange: edit_handler(&workflow, draft, Field::Occupation),
                    required: true,
                    option { value: "", disabled: true, "Select Occupation" }
                    for occupation in Occupation::variants() {
                        option {
                            value: occupation.value(),
                            selected: current.occupation() == Some(*occupation),
                            "{occupation.label()}"
                        }
                    }
                }
            }

            if current.wants_other_occupation() {
                div {
                    class: "field",
                    input {
                        r#type: "text",
                        id: "other-occupation",
                        placeholder: "Other Occupation",
                        value: current.other_occupation(),
                        oninput: edit_handler(&workflow, draft, Field::OtherOccupation),
                        required: true
                    }
                }
            }

            div {
                class: "field",
                input {
                    r#type: "text",
                    id: "organization",
                    placeholder: "Organization",
                    value: current.organization(),
                    oninput: edit_handler(&workflow, draft, Field::Organization)
                }
            }

            button {
                r#type: "submit",
                class: "preregisterbtn",
                disabled: submitting(),
                if submitting() {
                    "Registering..."
                } else {
                    "Register"
                }
            }
        }

        if let Some(current_notice) = notice() {
            NoticeBanner {
                notice: current_notice,
                on_dismiss: move |_| notice.set(None)
            }
        }
    }
}

/// Forward one field's edits into the workflow and refresh the rendered draft.
fn edit_handler(
    workflow: &Workflow,
    mut draft: Signal<RegistrationDraft>,
    field: Field,
) -> impl FnMut(FormEvent) + 'static {
    let workflow = workflow.clone();
    move |e: FormEvent| {
        workflow.edit(field, e.value());
        draft.set(workflow.draft());
    }
}

fn build_workflow() -> Result<Workflow, String> {
    HttpRegistrationClient::new(registration_config())
        .map(RegistrationWorkflow::new)
        .map_err(|e| {
            tracing::error!(error = %e, "Registration client unavailable");
            "Pre-registration is temporarily unavailable.".to_string()
        })
}

#[cfg(not(target_arch = "wasm32"))]
fn registration_config() -> RegistrationConfig {
    RegistrationConfig::from_env().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Falling back to default registration endpoint");
        RegistrationConfig::default()
    })
}

#[cfg(target_arch = "wasm32")]
fn registration_config() -> RegistrationConfig {
    RegistrationConfig::default()
}
