use leptos::prelude::*;

use super::typing::TypingOnView;
use crate::profile::Icon;

pub fn icon_glyph(icon: Icon) -> &'static str {
    match icon {
        Icon::Briefcase => "💼",
        Icon::Calendar => "📅",
        Icon::Sparkles => "✨",
        Icon::Shield => "🛡️",
        Icon::Code => "💻",
        Icon::GraduationCap => "🎓",
    }
}

#[component]
pub fn Pill(#[prop(into)] label: String) -> impl IntoView {
    view! {
        <span class="inline-flex items-center rounded-full border border-slate-200 bg-white/70 px-3 py-1 text-sm text-slate-700 shadow-sm backdrop-blur hover:bg-white transition">
            {label}
        </span>
    }
}

#[component]
pub fn Pills(labels: Vec<String>) -> impl IntoView {
    view! {
        <div class="flex flex-wrap gap-2">
            {labels.into_iter().map(|label| view! { <Pill label /> }).collect_view()}
        </div>
    }
}

#[component]
pub fn Eyebrow(#[prop(into)] text: String) -> impl IntoView {
    view! {
        <div class="inline-flex items-center gap-2 rounded-full border border-slate-200 bg-white/70 px-3 py-1 text-xs font-medium text-slate-700 shadow-sm backdrop-blur">
            "✨ "
            {text}
        </div>
    }
}

#[component]
pub fn Card(
    icon: Icon,
    #[prop(into)] title: String,
    #[prop(into)] subtitle: String,
    #[prop(default = None)] badge: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="group relative overflow-hidden rounded-2xl border border-slate-200 bg-white/70 p-6 shadow-sm backdrop-blur transition hover:shadow-md">
            <div class="flex items-start justify-between gap-4">
                <div class="min-w-0">
                    <div class="flex items-center gap-2">
                        <span class="inline-flex h-9 w-9 items-center justify-center rounded-xl border border-slate-200 bg-white">
                            {icon_glyph(icon)}
                        </span>
                        <h3 class="text-lg font-semibold text-slate-900">{title}</h3>
                    </div>
                    {(!subtitle.is_empty())
                        .then(|| view! { <p class="mt-1 text-sm text-slate-600">{subtitle}</p> })}
                </div>
                {badge
                    .map(|badge| {
                        view! {
                            <div class="shrink-0 inline-flex items-center gap-2 rounded-full bg-indigo-600/10 px-3 py-1 text-xs font-semibold text-indigo-700">
                                {badge}
                            </div>
                        }
                    })}
            </div>
            <div class="mt-4 text-slate-700">{children()}</div>
        </div>
    }
}

/// Anchored page section whose title types itself out on first view.
#[component]
pub fn Section(
    id: &'static str,
    eyebrow: &'static str,
    #[prop(into)] title: String,
    children: Children,
) -> impl IntoView {
    view! {
        <section id=id class="scroll-mt-24 py-14 md:py-18 fade-up">
            <div class="mb-8">
                <Eyebrow text=eyebrow />
                <h2 class="mt-3 text-2xl md:text-3xl font-semibold tracking-tight text-slate-900">
                    <TypingOnView text=title />
                </h2>
            </div>
            {children()}
        </section>
    }
}
