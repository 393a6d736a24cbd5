//! List content for the dashboard cards
//!
//! Each function here turns a slice of the store snapshot into the rows a card
//! shows. They are pure: same input, same rows, nothing kept between frames.

use chrono::{DateTime, Datelike, TimeZone, Utc};

use crate::config::ProjectListMode;
use crate::dashboard::routes::Route;
use crate::store::{Collaborator, Issue, Project, User};

/// Message shown when no issues are assigned
pub const NO_ISSUES_MESSAGE: &str = "You currently do not have any issues assigned to you.";

/// One row in a card list
#[derive(Debug, Clone, PartialEq)]
pub struct ListItem {
    /// Entity id, unique within the list
    pub key: String,
    /// Link label
    pub header: String,
    pub description: String,
    /// Where the label links to
    pub route: Route,
}

/// CSS-style display of a gated element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Display {
    Block,
    None,
}

/// An element that is always present but only shown when `display` is `Block`.
///
/// This is presentation only. Hiding a prompt from non-admins grants and
/// denies nothing; the server enforces permissions.
#[derive(Debug, Clone, PartialEq)]
pub struct Gated<T> {
    pub element: T,
    pub display: Display,
}

impl<T> Gated<T> {
    pub fn is_visible(&self) -> bool {
        self.display == Display::Block
    }
}

/// Wrap `element` so it only shows for admins. Yields nothing until a user is known.
pub fn conditionally_render<T>(user: Option<&User>, element: T) -> Option<Gated<T>> {
    user.map(|user| Gated {
        element,
        display: if user.is_admin {
            Display::Block
        } else {
            Display::None
        },
    })
}

/// Which creation modal an empty-state prompt opens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreationPrompt {
    Project,
    User,
}

/// Body of a card list
#[derive(Debug, Clone, PartialEq)]
pub enum ListBody {
    Items(Vec<ListItem>),
    Prompt(Gated<CreationPrompt>),
    Message(&'static str),
    /// Nothing to draw
    Empty,
}

impl ListBody {
    pub fn items(&self) -> &[ListItem] {
        match self {
            ListBody::Items(items) => items,
            _ => &[],
        }
    }
}

/// Shown in place of a creation date the server did not supply
pub const UNKNOWN_DATE: &str = "an unknown date";

/// `month/day/year`, 1-based month, no padding
pub fn format_created<Tz: TimeZone>(created: Option<&DateTime<Utc>>, tz: &Tz) -> String {
    match created {
        Some(created) => {
            let local = created.with_timezone(tz);
            format!("{}/{}/{}", local.month(), local.day(), local.year())
        }
        None => UNKNOWN_DATE.to_string(),
    }
}

fn project_item<Tz: TimeZone>(project: &Project, tz: &Tz) -> ListItem {
    ListItem {
        key: project.id.clone(),
        header: project.title.clone(),
        description: format!("Created on {}", format_created(project.created.as_ref(), tz)),
        route: Route::SingleProject(project.id.clone()),
    }
}

/// Projects card. An absent or empty list shows the create prompt to everyone.
pub fn render_projects<Tz: TimeZone>(
    projects: Option<&[Project]>,
    mode: ProjectListMode,
    tz: &Tz,
) -> ListBody {
    let projects = match projects {
        Some(projects) if !projects.is_empty() => projects,
        _ => {
            return ListBody::Prompt(Gated {
                element: CreationPrompt::Project,
                display: Display::Block,
            })
        }
    };

    let items = match mode {
        ProjectListMode::SkipSeventh => projects
            .iter()
            .enumerate()
            .filter(|(index, _)| *index != 6)
            .map(|(_, project)| project_item(project, tz))
            .collect(),
        ProjectListMode::FirstSix => projects
            .iter()
            .take(6)
            .map(|project| project_item(project, tz))
            .collect(),
    };
    ListBody::Items(items)
}

/// Collaborators card. A loaded list is shown as is, even when empty; an
/// absent one shows the create prompt to admins only.
pub fn render_collaborators(all_users: Option<&[Collaborator]>, user: Option<&User>) -> ListBody {
    match all_users {
        Some(all_users) => ListBody::Items(
            all_users
                .iter()
                .map(|collaborator| ListItem {
                    key: collaborator.id.clone(),
                    header: format!("{} {}", collaborator.first_name, collaborator.last_name),
                    description: collaborator.id.clone(),
                    route: Route::SingleUser(collaborator.id.clone()),
                })
                .collect(),
        ),
        None => conditionally_render(user, CreationPrompt::User)
            .map(ListBody::Prompt)
            .unwrap_or(ListBody::Empty),
    }
}

/// Issues card. An absent or empty list shows a fixed message.
pub fn render_issues(issues: Option<&[Issue]>) -> ListBody {
    match issues {
        Some(issues) if !issues.is_empty() => ListBody::Items(
            issues
                .iter()
                .map(|issue| ListItem {
                    key: issue.id.clone(),
                    header: issue.summary.clone(),
                    description: issue.description.clone(),
                    route: Route::Issue(issue.id.clone()),
                })
                .collect(),
        ),
        _ => ListBody::Message(NO_ISSUES_MESSAGE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(is_admin: bool) -> User {
        User {
            id: "u1".to_string(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            is_admin,
        }
    }

    fn projects(count: usize) -> Vec<Project> {
        (0..count)
            .map(|i| Project {
                id: format!("p{}", i),
                title: format!("Project {}", i),
                created: Some(Utc.with_ymd_and_hms(2019, 3, (i + 1) as u32, 12, 0, 0).unwrap()),
            })
            .collect()
    }

    fn keys(body: &ListBody) -> Vec<&str> {
        body.items().iter().map(|item| item.key.as_str()).collect()
    }

    #[test]
    fn test_format_created_unpadded() {
        let created = Utc.with_ymd_and_hms(2019, 3, 7, 12, 0, 0).unwrap();
        assert_eq!(format_created(Some(&created), &Utc), "3/7/2019");

        let created = Utc.with_ymd_and_hms(2020, 12, 25, 0, 0, 0).unwrap();
        assert_eq!(format_created(Some(&created), &Utc), "12/25/2020");
    }

    #[test]
    fn test_format_created_in_offset_zone() {
        let created = Utc.with_ymd_and_hms(2021, 1, 1, 2, 0, 0).unwrap();
        let behind = chrono::FixedOffset::west_opt(5 * 3600).unwrap();
        assert_eq!(format_created(Some(&created), &behind), "12/31/2020");
    }

    #[test]
    fn test_project_without_date_still_listed() {
        let list = vec![
            Project {
                id: "p1".to_string(),
                title: "Good".to_string(),
                created: Some(Utc.with_ymd_and_hms(2019, 3, 7, 12, 0, 0).unwrap()),
            },
            Project {
                id: "p2".to_string(),
                title: "NoDate".to_string(),
                created: None,
            },
        ];
        let body = render_projects(Some(list.as_slice()), ProjectListMode::SkipSeventh, &Utc);

        assert_eq!(keys(&body), vec!["p1", "p2"]);
        assert_eq!(body.items()[0].description, "Created on 3/7/2019");
        assert_eq!(body.items()[1].description, "Created on an unknown date");
    }

    #[test]
    fn test_short_project_list_renders_everything() {
        for count in 1..=6 {
            let list = projects(count);
            let body = render_projects(Some(list.as_slice()), ProjectListMode::SkipSeventh, &Utc);

            assert_eq!(body.items().len(), count);
            for (i, item) in body.items().iter().enumerate() {
                assert_eq!(item.header, format!("Project {}", i));
                assert_eq!(item.description, format!("Created on 3/{}/2019", i + 1));
                assert_eq!(item.route, Route::SingleProject(format!("p{}", i)));
            }
        }
    }

    #[test]
    fn test_seventh_project_is_skipped() {
        let list = projects(9);
        let body = render_projects(Some(list.as_slice()), ProjectListMode::SkipSeventh, &Utc);

        assert_eq!(keys(&body), vec!["p0", "p1", "p2", "p3", "p4", "p5", "p7", "p8"]);
    }

    #[test]
    fn test_first_six_mode_caps_list() {
        let list = projects(9);
        let body = render_projects(Some(list.as_slice()), ProjectListMode::FirstSix, &Utc);

        assert_eq!(keys(&body), vec!["p0", "p1", "p2", "p3", "p4", "p5"]);
    }

    #[test]
    fn test_modes_agree_up_to_six() {
        let list = projects(6);
        assert_eq!(
            render_projects(Some(list.as_slice()), ProjectListMode::SkipSeventh, &Utc),
            render_projects(Some(list.as_slice()), ProjectListMode::FirstSix, &Utc)
        );
    }

    #[test]
    fn test_empty_or_absent_projects_prompt_everyone() {
        let expected = ListBody::Prompt(Gated {
            element: CreationPrompt::Project,
            display: Display::Block,
        });
        assert_eq!(render_projects(None, ProjectListMode::SkipSeventh, &Utc), expected);
        assert_eq!(render_projects(Some(&[][..]), ProjectListMode::SkipSeventh, &Utc), expected);
    }

    #[test]
    fn test_issues_render_summaries_as_links() {
        let issues = vec![
            Issue {
                id: "i1".to_string(),
                summary: "Crash on save".to_string(),
                description: "Happens every time".to_string(),
            },
            Issue {
                id: "i2".to_string(),
                summary: "Typo in footer".to_string(),
                description: String::new(),
            },
        ];
        let body = render_issues(Some(issues.as_slice()));

        let headers: Vec<_> = body.items().iter().map(|i| i.header.as_str()).collect();
        assert_eq!(headers, vec!["Crash on save", "Typo in footer"]);
        assert_eq!(body.items()[0].route.path(), "issue/i1");
        assert_eq!(body.items()[0].description, "Happens every time");
    }

    #[test]
    fn test_no_issues_shows_message() {
        assert_eq!(render_issues(Some(&[][..])), ListBody::Message(NO_ISSUES_MESSAGE));
        assert_eq!(render_issues(None), ListBody::Message(NO_ISSUES_MESSAGE));
    }

    #[test]
    fn test_collaborators_listed_by_full_name() {
        let users = vec![Collaborator {
            id: "c1".to_string(),
            first_name: "Grace".to_string(),
            last_name: "Hopper".to_string(),
        }];
        let body = render_collaborators(Some(users.as_slice()), Some(&user(false)));

        let item = &body.items()[0];
        assert_eq!(item.header, "Grace Hopper");
        assert_eq!(item.description, "c1");
        assert_eq!(item.route.path(), "singleUser/c1");
    }

    #[test]
    fn test_loaded_empty_collaborators_show_no_prompt() {
        let body = render_collaborators(Some(&[][..]), Some(&user(true)));
        assert_eq!(body, ListBody::Items(Vec::new()));
    }

    #[test]
    fn test_absent_collaborators_prompt_visible_to_admin() {
        let admin = user(true);
        match render_collaborators(None, Some(&admin)) {
            ListBody::Prompt(gated) => {
                assert_eq!(gated.element, CreationPrompt::User);
                assert!(gated.is_visible());
            }
            other => panic!("expected prompt, got {:?}", other),
        }
    }

    #[test]
    fn test_absent_collaborators_prompt_hidden_from_non_admin() {
        let member = user(false);
        match render_collaborators(None, Some(&member)) {
            ListBody::Prompt(gated) => {
                assert_eq!(gated.element, CreationPrompt::User);
                assert_eq!(gated.display, Display::None);
            }
            other => panic!("expected hidden prompt, got {:?}", other),
        }
    }

    #[test]
    fn test_conditionally_render_without_user() {
        assert!(conditionally_render(None, "anything").is_none());
        assert_eq!(render_collaborators(None, None), ListBody::Empty);
    }
}
