//! Home page

use leptos::*;
use tf_core::showcase::features;
use crate::components::*;
use crate::content::news_items;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div>
            // Hero Section
            <section class="bg-gradient-to-br from-blue-800 via-blue-700 to-blue-600 text-white">
                <div class="container mx-auto px-4 py-24">
                    <div class="max-w-4xl mx-auto text-center">
                        <h1 class="text-5xl md:text-6xl font-bold mb-6">
                            "Data Diode Technology for "
                            <span class="text-blue-200">"Critical Infrastructure"</span>
                        </h1>
                        <p class="text-xl md:text-2xl text-blue-100 mb-8">
                            "FPGA-based unidirectional gateways that keep industrial networks isolated "
                            "while data keeps flowing where it must."
                        </p>
                        <div class="flex flex-col sm:flex-row gap-4 justify-center">
                            <a href="/contact" class="px-8 py-4 bg-white text-blue-800 font-semibold rounded-lg hover:bg-blue-50 transition">
                                "Request a Quote"
                            </a>
                            <a href="/#features" class="px-8 py-4 bg-white/10 hover:bg-white/20 text-white font-semibold rounded-lg border border-white/30 transition">
                                "Learn More"
                            </a>
                        </div>
                    </div>
                </div>
            </section>

            // Features
            <section id="features" class="py-20 bg-white">
                <div class="container mx-auto px-4">
                    <div class="max-w-3xl mx-auto text-center mb-16">
                        <h2 class="text-3xl md:text-4xl font-bold text-gray-900 mb-4">
                            "Hardware-Enforced Protection"
                        </h2>
                        <p class="text-lg text-gray-600">
                            "No return path, no routable connection, no software to compromise."
                        </p>
                    </div>
                    <div class="grid md:grid-cols-3 gap-8">
                        {features().into_iter().map(|feature| view! {
                            <FeatureCard
                                title=feature.title
                                description=feature.description
                                image=feature.image
                            />
                        }).collect::<Vec<_>>()}
                    </div>
                </div>
            </section>

            <CertificationCarousel/>

            <NewsPreviewSection items=news_items()/>

            // CTA
            <section class="py-20 bg-blue-800 text-white">
                <div class="container mx-auto px-4 text-center">
                    <h2 class="text-3xl md:text-4xl font-bold mb-4">
                        "Ready to harden your network?"
                    </h2>
                    <p class="text-xl text-blue-100 mb-8">
                        "Tell us about your project and a market specialist will get back to you."
                    </p>
                    <a href="/contact" class="inline-block px-8 py-4 bg-white text-blue-800 font-semibold rounded-lg hover:bg-blue-50 transition">
                        "Contact Us"
                    </a>
                </div>
            </section>
        </div>
    }
}
