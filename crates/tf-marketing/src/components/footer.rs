//! Site footer

use leptos::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-gray-900 text-gray-300">
            <div class="container mx-auto px-4 py-12">
                <div class="grid md:grid-cols-3 gap-8">
                    <div>
                        <h3 class="text-white font-semibold text-lg mb-4">"Terafence Private Limited"</h3>
                        <p class="text-sm leading-relaxed">
                            "209, Suncity Success Tower, Sector-65, Gurugram-122005, Haryana, India"
                        </p>
                    </div>
                    <div>
                        <h3 class="text-white font-semibold text-lg mb-4">"Contact"</h3>
                        <p class="text-sm">
                            <a href="mailto:info@terafence.in" class="hover:text-white">"info@terafence.in"</a>
                        </p>
                        <p class="text-sm mt-2">"10 AM to 07 PM (Monday to Friday)"</p>
                    </div>
                    <div>
                        <h3 class="text-white font-semibold text-lg mb-4">"Company"</h3>
                        <ul class="space-y-2 text-sm">
                            <li><a href="/" class="hover:text-white">"Home"</a></li>
                            <li><a href="/contact" class="hover:text-white">"Contact Us"</a></li>
                        </ul>
                    </div>
                </div>
                <div class="border-t border-gray-800 mt-8 pt-8 text-sm text-center">
                    "© Terafence Private Limited. All rights reserved."
                </div>
            </div>
        </footer>
    }
}
