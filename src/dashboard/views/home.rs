//! Home view - greeting, assigned issues, projects and collaborators

use chrono::TimeZone;
use egui::RichText;

use crate::config::ProjectListMode;
use crate::dashboard::components::{CardLayout, SummaryCard};
use crate::dashboard::state::DashboardState;
use crate::dashboard::theme::ThemeColors;
use crate::dashboard::views::lists::{render_collaborators, render_issues, render_projects};
use crate::store::DashboardSlice;

/// Placeholder shown until the user is known
pub const LOADING_TEXT: &str = "Loading";

/// What the home view shows for one snapshot
#[derive(Debug, Clone, PartialEq)]
pub enum HomeScreen {
    Loading,
    Ready { cards: [SummaryCard; 3] },
}

/// Build the home view for a store snapshot.
///
/// Nothing but the placeholder is built until a user is present; once it is,
/// each card reflects whatever its list currently holds.
pub fn compose_home<Tz: TimeZone>(
    slice: &DashboardSlice,
    project_list: ProjectListMode,
    tz: &Tz,
) -> HomeScreen {
    let Some(user) = slice.user.as_ref() else {
        return HomeScreen::Loading;
    };

    let issues = SummaryCard::new(
        "issues",
        format!("Welcome back, {}", user.first_name),
        "Issues/Tasks",
        "Tasks Assigned to you:",
        render_issues(slice.issues.as_deref()),
    );
    let projects = SummaryCard::new(
        "projects",
        "Your Projects",
        "Projects",
        "List of Projects Under Development",
        render_projects(slice.projects.as_deref(), project_list, tz),
    );
    let users = SummaryCard::new(
        "users",
        "All Users",
        "Users that are affiliated to you and the projects you have created.",
        "List of Users",
        render_collaborators(slice.all_users.as_deref(), Some(user)),
    )
    .animate_on_mount();

    HomeScreen::Ready {
        cards: [issues, projects, users],
    }
}

/// Render the home view
pub fn render_home_view(
    ui: &mut egui::Ui,
    screen: &HomeScreen,
    visible: bool,
    layout: &CardLayout,
    state: &mut DashboardState,
) {
    match screen {
        HomeScreen::Loading => {
            ui.label(RichText::new(LOADING_TEXT).color(ThemeColors::TEXT_SECONDARY));
        }
        HomeScreen::Ready { cards } => {
            ui.columns(cards.len(), |columns| {
                for (column, card) in columns.iter_mut().zip(cards.iter()) {
                    card.show(column, visible, layout, state);
                }
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::views::lists::{ListBody, NO_ISSUES_MESSAGE};
    use crate::store::{Collaborator, Issue, Project, User};
    use chrono::Utc;

    fn user(is_admin: bool) -> User {
        User {
            id: "u1".to_string(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            is_admin,
        }
    }

    fn cards(screen: HomeScreen) -> [SummaryCard; 3] {
        match screen {
            HomeScreen::Ready { cards } => cards,
            HomeScreen::Loading => panic!("expected cards"),
        }
    }

    #[test]
    fn test_no_user_is_only_loading() {
        let slice = DashboardSlice {
            user: None,
            projects: Some(Vec::new()),
            all_users: Some(Vec::new()),
            issues: Some(vec![Issue {
                id: "i1".to_string(),
                summary: "Orphan".to_string(),
                description: String::new(),
            }]),
        };

        assert_eq!(
            compose_home(&slice, ProjectListMode::SkipSeventh, &Utc),
            HomeScreen::Loading
        );
    }

    #[test]
    fn test_user_without_first_name_still_renders() {
        let mut nameless = user(false);
        nameless.first_name = String::new();
        let slice = DashboardSlice {
            user: Some(nameless),
            ..Default::default()
        };

        assert!(matches!(
            compose_home(&slice, ProjectListMode::SkipSeventh, &Utc),
            HomeScreen::Ready { .. }
        ));
    }

    #[test]
    fn test_greeting_uses_first_name() {
        let slice = DashboardSlice {
            user: Some(user(false)),
            ..Default::default()
        };
        let [issues, projects, users] = cards(compose_home(&slice, ProjectListMode::SkipSeventh, &Utc));

        assert!(issues.title.contains("Ada"));
        assert_eq!(issues.title, "Welcome back, Ada");
        assert_eq!(projects.title, "Your Projects");
        assert_eq!(users.title, "All Users");
    }

    #[test]
    fn test_only_users_card_animates_on_mount() {
        let slice = DashboardSlice {
            user: Some(user(false)),
            ..Default::default()
        };
        let [issues, projects, users] = cards(compose_home(&slice, ProjectListMode::SkipSeventh, &Utc));

        assert!(!issues.animate_on_mount);
        assert!(!projects.animate_on_mount);
        assert!(users.animate_on_mount);
    }

    #[test]
    fn test_user_only_snapshot_shows_empty_states() {
        let slice = DashboardSlice {
            user: Some(user(false)),
            ..Default::default()
        };
        let [issues, projects, users] = cards(compose_home(&slice, ProjectListMode::SkipSeventh, &Utc));

        assert_eq!(issues.body, ListBody::Message(NO_ISSUES_MESSAGE));
        assert!(matches!(projects.body, ListBody::Prompt(ref p) if p.is_visible()));
        assert!(matches!(users.body, ListBody::Prompt(ref p) if !p.is_visible()));
    }

    #[test]
    fn test_partial_data_renders_partially() {
        let slice = DashboardSlice {
            user: Some(user(true)),
            projects: Some(vec![Project {
                id: "p1".to_string(),
                title: "Engine".to_string(),
                created: Some(Utc.with_ymd_and_hms(2019, 3, 7, 12, 0, 0).unwrap()),
            }]),
            all_users: Some(vec![Collaborator {
                id: "c1".to_string(),
                first_name: "Grace".to_string(),
                last_name: "Hopper".to_string(),
            }]),
            issues: None,
        };
        let [issues, projects, users] = cards(compose_home(&slice, ProjectListMode::SkipSeventh, &Utc));

        assert_eq!(issues.body, ListBody::Message(NO_ISSUES_MESSAGE));
        assert_eq!(projects.body.items()[0].description, "Created on 3/7/2019");
        assert_eq!(users.body.items()[0].header, "Grace Hopper");
    }

    #[test]
    fn test_project_list_mode_is_applied() {
        let projects: Vec<Project> = (0..8)
            .map(|i| Project {
                id: format!("p{}", i),
                title: format!("Project {}", i),
                created: Some(Utc.with_ymd_and_hms(2020, 1, 1, 12, 0, 0).unwrap()),
            })
            .collect();
        let slice = DashboardSlice {
            user: Some(user(false)),
            projects: Some(projects),
            ..Default::default()
        };

        let [_, literal, _] = cards(compose_home(&slice, ProjectListMode::SkipSeventh, &Utc));
        let [_, capped, _] = cards(compose_home(&slice, ProjectListMode::FirstSix, &Utc));

        assert_eq!(literal.body.items().len(), 7);
        assert!(literal.body.items().iter().all(|item| item.key != "p6"));
        assert_eq!(capped.body.items().len(), 6);
    }
}
