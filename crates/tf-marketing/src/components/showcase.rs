//! Certification carousel and news preview

use leptos::*;
use tf_core::showcase::{
    certifications, Carousel, Certification, NewsItem, NewsPreview, BOOKMARK_ALERT_DURATION,
    CAROUSEL_INTERVAL,
};

#[component]
pub fn CertificationCarousel() -> impl IntoView {
    let carousel = create_rw_signal(Carousel::new(certifications()));

    let advance = move || {
        carousel.update(|c| {
            if let Some(c) = c {
                c.advance();
            }
        })
    };

    // Only runs in the browser; the timer stops when the carousel unmounts
    create_effect(move |_| match set_interval_with_handle(advance, CAROUSEL_INTERVAL) {
        Ok(handle) => on_cleanup(move || handle.clear()),
        Err(e) => tracing::warn!("Carousel timer unavailable: {:?}", e),
    });

    let current = move || carousel.with(|c| c.as_ref().map(|c| c.current().clone()));
    let indicators = move || {
        carousel.with(|c| c.as_ref().map(Carousel::indicators).unwrap_or_default())
    };

    view! {
        <section id="certifications" class="py-20 bg-gray-50">
            <div class="container mx-auto px-4">
                <div class="max-w-3xl mx-auto text-center mb-16">
                    <h2 class="text-3xl md:text-4xl font-bold text-gray-900 mb-4">
                        "Enterprise-grade security certifications"
                    </h2>
                    <p class="text-lg text-gray-600">
                        "Our platform adheres to the highest security standards and compliance requirements to keep your data safe."
                    </p>
                </div>
                <div class="grid lg:grid-cols-2 gap-8 items-center max-w-5xl mx-auto">
                    {move || current().map(|cert: Certification| view! {
                        <div class="relative h-80 rounded-xl overflow-hidden shadow-xl bg-white flex items-center justify-center p-8">
                            <img
                                src=cert.image
                                alt=format!("{} certification", cert.title)
                                class="max-h-full max-w-full object-contain"
                            />
                        </div>
                        <div class="bg-white rounded-xl shadow p-6">
                            <h3 class="text-2xl font-semibold text-gray-900 mb-2">{cert.title}</h3>
                            <span class="inline-block text-xs font-medium px-2 py-1 rounded bg-blue-50 text-blue-700 mb-4">
                                "Security Certified"
                            </span>
                            <p class="text-gray-700 leading-relaxed">{cert.description}</p>
                        </div>
                    })}
                </div>
                <div class="flex justify-center items-center gap-2 mt-8">
                    {move || indicators().into_iter().enumerate().map(|(i, active)| view! {
                        <button
                            class={if active { "w-6 h-2 rounded-full bg-blue-600" } else { "w-2 h-2 rounded-full bg-blue-600/30" }}
                            aria-label=format!("Show certification {}", i + 1)
                            on:click=move |_| carousel.update(|c| {
                                if let Some(c) = c {
                                    c.select(i);
                                }
                            })
                        ></button>
                    }).collect::<Vec<_>>()}
                    <button class="ml-4 text-sm text-blue-700 hover:underline" on:click=move |_| advance()>
                        "Next →"
                    </button>
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn NewsPreviewSection(items: Vec<NewsItem>) -> impl IntoView {
    let preview = create_rw_signal(NewsPreview::new(items));
    let (alert, set_alert) = create_signal(None::<String>);

    let toggle = move |id: String, title: String| {
        let message = preview
            .try_update(|p| p.toggle_bookmark(&id, &title))
            .unwrap_or_default();
        set_alert.set(Some(message));
        set_timeout(move || set_alert.set(None), BOOKMARK_ALERT_DURATION);
    };

    let featured = move || preview.with(|p| p.featured().cloned());
    let others = move || preview.with(|p| p.others().to_vec());

    view! {
        <section id="news" class="py-20 bg-white">
            <div class="container mx-auto px-4">
                <div class="text-center mb-12 space-y-3">
                    <span class="bg-blue-50 text-blue-600 font-semibold px-4 py-1 rounded-full text-sm">"Latest Updates"</span>
                    <h2 class="text-3xl sm:text-4xl font-bold text-gray-900">"Cybersecurity Insights"</h2>
                    <p class="text-lg text-gray-600">"Stay ahead of threats with expert analysis and breaking news"</p>
                </div>
                <div class="grid lg:grid-cols-12 gap-5">
                    <div class="lg:col-span-7">
                        {move || featured().map(|item| view! {
                            <NewsCard item=item preview=preview on_bookmark=toggle featured=true/>
                        })}
                    </div>
                    <div class="lg:col-span-5 space-y-5">
                        {move || others().into_iter().map(|item| view! {
                            <NewsCard item=item preview=preview on_bookmark=toggle featured=false/>
                        }).collect::<Vec<_>>()}
                    </div>
                </div>
                <Show when=move || alert.with(Option::is_some)>
                    <div class="fixed bottom-6 right-6 bg-gray-900 text-white px-4 py-3 rounded-lg shadow-lg">
                        {move || alert.get().unwrap_or_default()}
                    </div>
                </Show>
            </div>
        </section>
    }
}

#[component]
fn NewsCard<F>(
    item: NewsItem,
    preview: RwSignal<NewsPreview>,
    on_bookmark: F,
    featured: bool,
) -> impl IntoView
where
    F: Fn(String, String) + Copy + 'static,
{
    let NewsItem { id, title, description, category, date, image_url, link } = item;
    let image = image_url.unwrap_or_else(|| "/assets/images/placeholder.svg".to_string());

    let bookmarked = {
        let id = id.clone();
        move || preview.with(|p| p.is_bookmarked(&id))
    };
    let on_click = {
        let title = title.clone();
        move |_: ev::MouseEvent| on_bookmark(id.clone(), title.clone())
    };

    view! {
        <div class="rounded-2xl shadow-lg overflow-hidden bg-white">
            {featured.then(|| view! {
                <img src=image alt=title.clone() class="h-64 w-full object-cover"/>
            })}
            <div class="p-5">
                <div class="flex justify-between items-center mb-2">
                    <span class="text-xs uppercase tracking-wide font-medium text-blue-600">{category}</span>
                    <button class="text-sm" on:click=on_click>
                        {move || if bookmarked() { "★ Saved" } else { "☆ Save" }}
                    </button>
                </div>
                <p class="text-sm text-blue-500 mb-2">{date}</p>
                <h3 class="text-xl font-bold mb-2 text-gray-900">{title}</h3>
                <p class="text-gray-600 mb-4 text-sm">{description}</p>
                <a href=link class="text-blue-700 font-medium hover:underline">"Read Article →"</a>
            </div>
        </div>
    }
}
