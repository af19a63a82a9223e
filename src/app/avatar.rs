use leptos::prelude::*;

use crate::profile::Profile;

/// An `<img>` that swaps to `fallback` for good once the browser reports a load error.
#[component]
pub fn FallbackImage(
    #[prop(into)] src: String,
    #[prop(into)] alt: String,
    #[prop(into)] fallback: ViewFn,
) -> impl IntoView {
    let (failed, set_failed) = signal(false);

    view! {
        <Show when=move || !failed.get() fallback>
            <img
                src=src.clone()
                alt=alt.clone()
                class="h-full w-full object-cover"
                on:error={
                    let src = src.clone();
                    move |_| {
                        log::debug!("image unavailable, showing fallback: {src}");
                        set_failed.set(true);
                    }
                }
            />
        </Show>
    }
}

#[component]
pub fn Avatar(profile: &'static Profile) -> impl IntoView {
    let initials = profile.initials();
    let hint = profile.hero_image.clone();
    view! {
        <div class="aspect-[4/5] w-full overflow-hidden bg-slate-100">
            <FallbackImage
                src=profile.hero_image.clone()
                alt=format!("{} portrait", profile.name)
                fallback=move || {
                    view! {
                        <div class="flex h-full w-full items-center justify-center p-8">
                            <div class="text-center">
                                <div class="mx-auto mb-3 inline-flex h-14 w-14 items-center justify-center rounded-2xl border border-slate-200 bg-white shadow-sm">
                                    <span class="text-base font-semibold text-slate-800">
                                        {initials.clone()}
                                    </span>
                                </div>
                                <p class="text-sm font-medium text-slate-700">
                                    "Add " <span class="font-semibold">{hint.clone()}</span>
                                    " for a portrait"
                                </p>
                            </div>
                        </div>
                    }
                }
            />
        </div>
    }
}

#[component]
pub fn InfoBlock(profile: &'static Profile) -> impl IntoView {
    view! {
        <div class="p-6">
            <div class="grid grid-cols-3 gap-3">
                {profile
                    .highlights
                    .iter()
                    .map(|h| {
                        view! {
                            <div class="rounded-2xl border border-slate-200 bg-white p-3">
                                <div class="text-xs text-slate-500">{h.label.clone()}</div>
                                <div class="mt-1 text-sm font-semibold">{h.value.clone()}</div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
pub fn Gallery(images: Vec<String>) -> impl IntoView {
    view! {
        <div class="mt-10 grid gap-4 md:grid-cols-3 fade-up">
            {images
                .into_iter()
                .map(|src| {
                    let hint = src.clone();
                    view! {
                        <div class="group relative overflow-hidden rounded-2xl border border-slate-200 bg-white/70 shadow-sm backdrop-blur">
                            <div class="aspect-[16/10] bg-slate-100">
                                <FallbackImage
                                    src
                                    alt="Gallery image"
                                    fallback=move || {
                                        view! {
                                            <div class="flex h-full w-full items-center justify-center p-6">
                                                <p class="text-xs text-slate-500">
                                                    "Add " <span class="font-semibold">{hint.clone()}</span>
                                                    " for images"
                                                </p>
                                            </div>
                                        }
                                    }
                                />
                            </div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
