//! Contact page
//!
//! The form is a projection of one [`ContactSubmissionFlow`]. Submitting
//! moves the flow to `Submitting`, sends the snapshot through the
//! [`submit_inquiry`] server function once, and hands the answer back to
//! the flow.

use leptos::*;
use tf_core::{BusinessSegment, ContactForm, ContactSubmissionFlow, Field, HelpType, SubmissionError};
use tf_core::contact::REFERRAL_SOURCES;
use crate::api::submit_inquiry;
use crate::components::*;

#[component]
pub fn ContactPage() -> impl IntoView {
    let flow = create_rw_signal(ContactSubmissionFlow::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let request = match flow.try_update(|f| f.begin_submit()) {
            Some(Ok(request)) => request,
            Some(Err(e)) => {
                tracing::debug!("Contact form not submitted: {}", e);
                return;
            }
            None => return,
        };

        let form = ContactForm::from(&request);
        spawn_local(async move {
            let result = submit_inquiry(form)
                .await
                .unwrap_or_else(|e| Err(SubmissionError::Transport(e.to_string())));
            flow.update(|f| {
                if let Err(e) = f.complete(result) {
                    tracing::warn!("Dropped submission result: {}", e);
                }
            });
        });
    };

    let submitting = move || flow.with(ContactSubmissionFlow::is_submitting);

    let segments = BusinessSegment::ALL.iter().map(|s| (s.value(), s.label())).collect::<Vec<_>>();
    let help_types = HelpType::ALL.iter().map(|h| (h.value(), h.label())).collect::<Vec<_>>();
    let referrals = REFERRAL_SOURCES.to_vec();

    view! {
        <div>
            // Hero
            <section class="bg-gradient-to-br from-blue-800 via-blue-700 to-blue-600 text-white py-24">
                <div class="container mx-auto px-4">
                    <div class="max-w-4xl mx-auto text-center">
                        <h1 class="text-4xl md:text-5xl font-bold mb-6">"How can we help you?"</h1>
                        <p class="text-xl text-blue-100">
                            "Our team is always ready to assist. To best serve you, please provide as much "
                            "information as possible. Upon inquiry, your request will be directed to the "
                            "appropriate market specialist for a quick response."
                        </p>
                    </div>
                </div>
            </section>

            // Contact Form
            <section class="py-20 bg-gray-50">
                <div class="container mx-auto px-4">
                    <h2 class="text-3xl font-bold text-center text-blue-800 mb-12">"Information & Quote Requests"</h2>
                    <div class="grid md:grid-cols-2 gap-12 max-w-6xl mx-auto">
                        // Intro
                        <div class="flex flex-col justify-center">
                            <h3 class="text-2xl font-bold mb-6 text-blue-900">
                                "Ready to harden your network and enable secure data transfers?"
                            </h3>
                            <p class="text-gray-700 mb-8 leading-relaxed">
                                "Each customer has unique projects, operational needs, and goals. Our tech team is "
                                "here to guide you toward the best solutions. Complete the form so we can provide "
                                "an appropriate response as quickly as possible."
                            </p>
                            <div class="space-y-6">
                                <ContactDetail icon="📧" title="Email">
                                    <a href="mailto:info@terafence.in" class="text-blue-600 hover:underline">"info@terafence.in"</a>
                                </ContactDetail>
                                <ContactDetail icon="🕐" title="Timings">
                                    "10 AM to 07 PM (Monday to Friday)"
                                </ContactDetail>
                                <ContactDetail icon="📍" title="Office">
                                    "209, Suncity Success Tower, Sector-65, Gurugram-122005, Haryana, India"
                                </ContactDetail>
                            </div>
                        </div>

                        // Form
                        <div class="bg-white rounded-xl shadow-lg p-8 border border-gray-100">
                            <Show
                                when=move || !flow.with(ContactSubmissionFlow::is_submitted)
                                fallback=move || view! {
                                    <div class="text-center py-10">
                                        <div class="w-20 h-20 bg-green-100 rounded-full flex items-center justify-center mx-auto mb-6 text-4xl">
                                            "✓"
                                        </div>
                                        <h3 class="text-2xl font-bold text-green-600 mb-4">"Thank You!"</h3>
                                        <p class="text-gray-700 mb-6">
                                            "Your inquiry has been submitted successfully. Our team will get back to you shortly."
                                        </p>
                                        <button
                                            class="px-6 py-3 border border-green-200 text-green-700 rounded-lg hover:bg-green-50"
                                            on:click=move |_| flow.update(|f| {
                                                if let Err(e) = f.reset() {
                                                    tracing::debug!("Reset ignored: {}", e);
                                                }
                                            })
                                        >
                                            "Submit Another Request"
                                        </button>
                                    </div>
                                }
                            >
                                <form on:submit=on_submit class="space-y-6">
                                    <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                                        <TextField flow=flow field=Field::FirstName placeholder="first name"/>
                                        <TextField flow=flow field=Field::LastName placeholder="last name"/>
                                    </div>

                                    <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                                        <TextField flow=flow field=Field::Email placeholder="username@example.com" input_type="email"/>
                                        <TextField flow=flow field=Field::Phone placeholder="+91 98765 43210" input_type="tel"/>
                                    </div>

                                    <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                                        <TextField flow=flow field=Field::Company placeholder="Acme Inc."/>
                                        <TextField flow=flow field=Field::JobTitle placeholder="IT Manager"/>
                                    </div>

                                    <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                                        <SelectField flow=flow field=Field::BusinessSegment options=segments.clone()/>
                                        <SelectField flow=flow field=Field::HelpType options=help_types.clone()/>
                                        <SelectField flow=flow field=Field::ReferralSource options=referrals.clone()/>
                                    </div>

                                    <TextAreaField
                                        flow=flow
                                        field=Field::AdditionalDetails
                                        placeholder="Please provide any additional information about your requirements..."
                                    />

                                    <div class="text-sm text-gray-500 bg-gray-50 p-3 rounded-md border border-gray-100">
                                        "Terafence Private Limited needs the contact information you provide to send you "
                                        "updates about our products and services. You may unsubscribe at any time from "
                                        "these communications via our Privacy Policy."
                                    </div>

                                    <button
                                        type="submit"
                                        class="w-full py-4 bg-blue-700 hover:bg-blue-800 disabled:opacity-60 text-white font-semibold rounded-lg transition"
                                        disabled=submitting
                                    >
                                        {move || if submitting() { "Submitting..." } else { "Submit" }}
                                    </button>
                                </form>
                            </Show>
                        </div>
                    </div>
                </div>
            </section>
        </div>
    }
}
