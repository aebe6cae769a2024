//! Marketing navigation component

use leptos::*;

#[component]
pub fn MarketingNav() -> impl IntoView {
    let (mobile_open, set_mobile_open) = create_signal(false);

    view! {
        <nav class="bg-white shadow-sm sticky top-0 z-50">
            <div class="container mx-auto px-4">
                <div class="flex justify-between h-16">
                    // Logo
                    <div class="flex items-center">
                        <a href="/" class="flex items-center">
                            <img src="/assets/icons/icon.png" alt="Terafence" class="h-8 w-8 mr-2"/>
                            <span class="text-xl font-bold text-gray-900">"Terafence"</span>
                        </a>
                    </div>

                    // Desktop Nav
                    <div class="hidden md:flex items-center space-x-8">
                        <a href="/" class="text-gray-600 hover:text-gray-900 transition">"Home"</a>
                        <a href="/#certifications" class="text-gray-600 hover:text-gray-900 transition">"Certifications"</a>
                        <a href="/#news" class="text-gray-600 hover:text-gray-900 transition">"News"</a>
                        <a href="/contact" class="px-4 py-2 bg-blue-700 hover:bg-blue-800 text-white font-medium rounded-lg transition">
                            "Contact Us"
                        </a>
                    </div>

                    // Mobile menu button
                    <div class="md:hidden flex items-center">
                        <button
                            class="p-2 rounded-md text-gray-600 hover:text-gray-900 hover:bg-gray-100"
                            on:click=move |_| set_mobile_open.update(|v| *v = !*v)
                        >
                            <Show
                                when=move || mobile_open.get()
                                fallback=|| view! {
                                    <svg class="h-6 w-6" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M4 6h16M4 12h16M4 18h16"/>
                                    </svg>
                                }
                            >
                                <svg class="h-6 w-6" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M6 18L18 6M6 6l12 12"/>
                                </svg>
                            </Show>
                        </button>
                    </div>
                </div>
            </div>

            // Mobile menu
            <Show when=move || mobile_open.get()>
                <div class="md:hidden border-t border-gray-200">
                    <div class="px-4 py-4 space-y-3">
                        <a href="/" class="block text-gray-600 hover:text-gray-900">"Home"</a>
                        <a href="/#certifications" class="block text-gray-600 hover:text-gray-900">"Certifications"</a>
                        <a href="/#news" class="block text-gray-600 hover:text-gray-900">"News"</a>
                        <a href="/contact" class="block w-full text-center px-4 py-2 bg-blue-700 text-white font-medium rounded-lg">
                            "Contact Us"
                        </a>
                    </div>
                </div>
            </Show>
        </nav>
    }
}
