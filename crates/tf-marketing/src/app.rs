//! Main application component

use leptos::*;
use leptos_router::*;
use crate::pages::*;
use crate::components::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <div class="min-h-screen flex flex-col bg-white">
                <MarketingNav/>
                <main class="flex-grow">
                    <Routes>
                        <Route path="/" view=HomePage/>
                        <Route path="/contact" view=ContactPage/>
                    </Routes>
                </main>
                <Footer/>
            </div>
        </Router>
    }
}
