//! Contact section: click-to-call, click-to-email and the request form.

use leptos::prelude::*;

use super::Icon;
use crate::compose::Section;
use crate::contact::{FormField, FormView};
use crate::types::{ContactSection, FormCopy, Glyph};

/// Contact section under the `contact` anchor: call and email links, then the form.
#[component]
pub fn ContactPanel(
    section: ContactSection,
    form: FormView,
    /// Where the form posts to; `None` leaves the form unwired
    form_action: Option<String>,
) -> impl IntoView {
    let tel = section.info.tel_uri();
    let mailto = section.info.mailto_uri();

    view! {
        <section id=Section::Contact.anchor() class="contact">
            <div class="container contact-grid">
                <div class="contact-intro">
                    <h2 class="section-title">{section.heading}</h2>
                    <p class="contact-blurb">{section.blurb}</p>
                    <div class="contact-links">
                        <a href=tel class="contact-link" data-role="call">
                            <Icon glyph=Glyph::Phone />
                            {section.info.phone_display}
                        </a>
                        <a href=mailto class="contact-link" data-role="email">
                            <Icon glyph=Glyph::Mail />
                            {section.info.email}
                        </a>
                    </div>
                </div>
                <ContactForm copy=section.form form=form form_action=form_action />
            </div>
        </section>
    }
}

/// The three-field request form.
#[component]
pub fn ContactForm(copy: FormCopy, form: FormView, form_action: Option<String>) -> impl IntoView {
    let method = form_action.as_ref().map(|_| "post");
    let name_error = form.error_for(FormField::Name);
    let email_error = form.error_for(FormField::Email);
    let details_error = form.error_for(FormField::CargoDetails);
    let submitting = form.submitting;
    let FormView { values, status, .. } = form;

    view! {
        <form class="contact-form" data-role="contact-form" action=form_action method=method>
            <div class="form-field">
                <label for="contact-name">{copy.name_label}</label>
                <input
                    id="contact-name"
                    type="text"
                    name=FormField::Name.wire_name()
                    placeholder=copy.name_placeholder
                    value=values.name
                    aria-invalid=name_error.map(|_| "true")
                />
                <FieldMessage field=FormField::Name message=name_error />
            </div>
            <div class="form-field">
                <label for="contact-email">{copy.email_label}</label>
                <input
                    id="contact-email"
                    type="email"
                    name=FormField::Email.wire_name()
                    placeholder=copy.email_placeholder
                    value=values.email
                    aria-invalid=email_error.map(|_| "true")
                />
                <FieldMessage field=FormField::Email message=email_error />
            </div>
            <div class="form-field">
                <label for="contact-details">{copy.details_label}</label>
                <textarea
                    id="contact-details"
                    name=FormField::CargoDetails.wire_name()
                    rows="4"
                    placeholder=copy.details_placeholder
                    aria-invalid=details_error.map(|_| "true")
                >
                    {values.cargo_details}
                </textarea>
                <FieldMessage field=FormField::CargoDetails message=details_error />
            </div>
            <button type="submit" class="btn btn-primary btn-block" disabled=submitting aria-busy=submitting.then_some("true")>
                {copy.submit_label}
            </button>
            {status.map(|text| view! { <p class="form-status" role="status">{text}</p> })}
        </form>
    }
}

#[component]
fn FieldMessage(field: FormField, message: Option<&'static str>) -> impl IntoView {
    message.map(|text| {
        view! {
            <p class="field-error" data-field=field.wire_name() role="alert">{text}</p>
        }
    })
}
