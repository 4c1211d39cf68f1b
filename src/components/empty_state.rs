//! Empty State Component
//!
//! Placeholder for a list with nothing to show.

use collection_view::EmptyReason;
use leptos::prelude::*;

/// Body copy for the placeholder. A search that filtered everything out gets
/// the same hint on every page; an empty list gets the page's own prompt.
pub fn empty_hint(reason: EmptyReason, first_time: &str) -> String {
    match reason {
        EmptyReason::NoMatches => "Try adjusting your search or filters".to_string(),
        EmptyReason::NothingYet => first_time.to_string(),
    }
}

/// Heading for the placeholder, e.g. "No storyboards found" after a search
/// and "No storyboards yet" for an empty list.
pub fn empty_title(reason: EmptyReason, noun: &str) -> String {
    match reason {
        EmptyReason::NoMatches => format!("No {} found", noun),
        EmptyReason::NothingYet => format!("No {} yet", noun),
    }
}

/// Icon, heading, hint and an optional primary action (passed as children)
#[component]
pub fn EmptyState(
    #[prop(into)] icon: String,
    #[prop(into)] title: Signal<String>,
    #[prop(into)] message: Signal<String>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class="empty-state">
            <div class="empty-icon">{icon}</div>
            <h3>{move || title.get()}</h3>
            <p class="muted">{move || message.get()}</p>
            {children.map(|action| view! { <div class="empty-action">{action()}</div> })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_hint_depends_on_search() {
        assert_eq!(
            empty_hint(EmptyReason::NoMatches, "Upload your first asset to get started"),
            "Try adjusting your search or filters"
        );
        assert_eq!(
            empty_hint(EmptyReason::NothingYet, "Upload your first asset to get started"),
            "Upload your first asset to get started"
        );
    }

    #[test]
    fn test_empty_title_depends_on_search() {
        assert_eq!(empty_title(EmptyReason::NoMatches, "storyboards"), "No storyboards found");
        assert_eq!(empty_title(EmptyReason::NothingYet, "storyboards"), "No storyboards yet");
    }
}
