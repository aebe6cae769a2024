//! Card components for marketing pages

use leptos::*;

#[component]
pub fn FeatureCard(
    title: &'static str,
    description: &'static str,
    image: &'static str,
) -> impl IntoView {
    view! {
        <div class="bg-white rounded-xl shadow-lg p-6">
            <img src=image alt=title class="h-32 w-full object-contain mb-4"/>
            <h3 class="text-xl font-semibold text-gray-900 mb-2">{title}</h3>
            <p class="text-gray-600">{description}</p>
        </div>
    }
}

#[component]
pub fn ContactDetail(
    icon: &'static str,
    title: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="flex items-start">
            <div class="flex-shrink-0 w-12 h-12 bg-blue-100 rounded-lg flex items-center justify-center">
                <span class="text-xl">{icon}</span>
            </div>
            <div class="ml-4">
                <h3 class="font-semibold text-gray-900">{title}</h3>
                <div class="text-gray-600">{children()}</div>
            </div>
        </div>
    }
}
