use leptos::prelude::*;

use crate::profile::profile;

const NAV_LINKS: [(&str, &str); 6] = [
    ("#about", "About"),
    ("#experience", "Experience"),
    ("#leadership", "Leadership"),
    ("#skills", "Skills"),
    ("#education", "Education"),
    ("#contact", "Contact"),
];

#[component]
fn NavLink(href: &'static str, label: &'static str) -> impl IntoView {
    view! {
        <a href=href class="text-sm font-medium text-slate-700 hover:text-slate-900 transition">
            {label}
        </a>
    }
}

#[component]
pub fn Header() -> impl IntoView {
    let profile = profile();

    view! {
        <header class="sticky top-0 z-50 border-b border-slate-200 bg-white/70 backdrop-blur">
            <div class="mx-auto max-w-6xl px-4 md:px-6">
                <div class="flex h-16 items-center justify-between">
                    <a href="#top" class="flex items-center gap-2">
                        <span class="inline-flex h-9 w-9 items-center justify-center rounded-xl border border-slate-200 bg-white shadow-sm">
                            <span class="text-sm font-semibold text-slate-800">
                                {profile.initials()}
                            </span>
                        </span>
                        <div class="leading-tight">
                            <div class="text-sm font-semibold">{profile.name.clone()}</div>
                            <div class="text-xs text-slate-600">"Portfolio"</div>
                        </div>
                    </a>

                    <nav class="hidden md:flex items-center gap-6">
                        {NAV_LINKS
                            .into_iter()
                            .map(|(href, label)| view! { <NavLink href label /> })
                            .collect_view()}
                    </nav>

                    <div class="flex items-center gap-2">
                        <a
                            href=profile.linkedin_href.clone()
                            target="_blank"
                            rel="noreferrer"
                            class="inline-flex items-center gap-2 rounded-xl border border-slate-200 bg-white px-3 py-2 text-sm font-medium text-slate-800 shadow-sm hover:shadow-md transition"
                            aria-label="LinkedIn"
                            title="LinkedIn"
                        >
                            <span class="hidden sm:inline">"LinkedIn"</span>
                            <span class="sm:hidden">"in"</span>
                        </a>
                        <a
                            href=profile.cv_href.clone()
                            class="inline-flex items-center gap-2 rounded-xl bg-slate-900 px-3 py-2 text-sm font-medium text-white shadow-sm hover:shadow-md hover:bg-slate-800 transition"
                            aria-label="Download CV"
                            title="Download CV"
                        >
                            "⬇"
                            <span class="hidden sm:inline">"CV"</span>
                        </a>
                    </div>
                </div>
            </div>
        </header>
    }
}
