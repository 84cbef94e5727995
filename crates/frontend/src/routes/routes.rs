//! Path-based routing read from `window.location`.

use crate::domain::a001_plugin_installation::ui::settings::InstalledPluginSettings;
use crate::layout::global_context::AppGlobalContext;
use contracts::domain::a001_plugin_installation::aggregate::{PluginInstallationId, ResourceId};
use contracts::domain::common::AggregateId;
use leptos::prelude::*;
use web_sys::window;

#[derive(Debug, Clone, PartialEq)]
pub enum AppRoute {
    /// `/:workspace/:project/:resource/plugins/installed/:plugin`
    InstalledPluginSettings {
        workspace_id: String,
        project_id: String,
        resource_id: ResourceId,
        installation_id: PluginInstallationId,
    },
    NotFound,
}

impl AppRoute {
    pub fn parse(path: &str) -> Self {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [workspace, project, resource, "plugins", "installed", plugin] => {
                match (
                    ResourceId::from_string(resource),
                    PluginInstallationId::from_string(plugin),
                ) {
                    (Ok(resource_id), Ok(installation_id)) => Self::InstalledPluginSettings {
                        workspace_id: workspace.to_string(),
                        project_id: project.to_string(),
                        resource_id,
                        installation_id,
                    },
                    _ => Self::NotFound,
                }
            }
            _ => Self::NotFound,
        }
    }
}

/// Path of the installed plugin list of a resource
pub fn installed_plugins_path(workspace_id: &str, project_id: &str, resource_id: &str) -> String {
    format!(
        "/{}/{}/{}/plugins/installed",
        workspace_id, project_id, resource_id
    )
}

fn current_path() -> String {
    window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_default()
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    let route = AppRoute::parse(&current_path());
    log::debug!("Route: {:?}", route);
    ctx.set_from_route(&route);

    match route {
        AppRoute::InstalledPluginSettings {
            resource_id,
            installation_id,
            ..
        } => {
            let back_to = Signal::derive(move || ctx.installed_plugins_path());
            view! {
                <InstalledPluginSettings
                    resource_id=resource_id
                    installation_id=installation_id
                    back_to=back_to
                />
            }
            .into_any()
        }
        AppRoute::NotFound => view! {
            <div class="not-found" style="padding: 20px;">"Page not found"</div>
        }
        .into_any(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_installed_plugin_route() {
        assert_eq!(
            AppRoute::parse("/ws1/proj1/res1/plugins/installed/inst1"),
            AppRoute::InstalledPluginSettings {
                workspace_id: "ws1".into(),
                project_id: "proj1".into(),
                resource_id: ResourceId::new("res1"),
                installation_id: PluginInstallationId::new("inst1"),
            }
        );
    }

    #[test]
    fn test_parse_ignores_trailing_slash() {
        assert!(matches!(
            AppRoute::parse("/ws1/proj1/res1/plugins/installed/inst1/"),
            AppRoute::InstalledPluginSettings { .. }
        ));
    }

    #[test]
    fn test_parse_unknown_paths() {
        assert_eq!(AppRoute::parse("/"), AppRoute::NotFound);
        assert_eq!(
            AppRoute::parse("/ws1/proj1/res1/plugins/installed"),
            AppRoute::NotFound
        );
        assert_eq!(
            AppRoute::parse("/ws1/proj1/res1/plugins/catalog/inst1"),
            AppRoute::NotFound
        );
    }

    #[test]
    fn test_installed_plugins_path() {
        assert_eq!(
            installed_plugins_path("ws1", "proj1", "res1"),
            "/ws1/proj1/res1/plugins/installed"
        );
    }
}
