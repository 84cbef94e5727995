use crate::routes::routes::{installed_plugins_path, AppRoute};
use contracts::domain::a001_plugin_installation::aggregate::ResourceId;
use leptos::prelude::*;

/// Workspace, project and resource the current page belongs to
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub current_workspace: RwSignal<Option<String>>,
    pub current_project: RwSignal<Option<String>>,
    pub current_resource: RwSignal<Option<ResourceId>>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            current_workspace: RwSignal::new(None),
            current_project: RwSignal::new(None),
            current_resource: RwSignal::new(None),
        }
    }

    pub fn set_from_route(&self, route: &AppRoute) {
        match route {
            AppRoute::InstalledPluginSettings {
                workspace_id,
                project_id,
                resource_id,
                ..
            } => {
                self.current_workspace.set(Some(workspace_id.clone()));
                self.current_project.set(Some(project_id.clone()));
                self.current_resource.set(Some(resource_id.clone()));
            }
            AppRoute::NotFound => {
                self.current_workspace.set(None);
                self.current_project.set(None);
                self.current_resource.set(None);
            }
        }
    }

    /// Installed plugin list of the current resource
    pub fn installed_plugins_path(&self) -> String {
        let workspace = self.current_workspace.get().unwrap_or_default();
        let project = self.current_project.get().unwrap_or_default();
        let resource = self
            .current_resource
            .get()
            .map(|r| r.0)
            .unwrap_or_default();
        installed_plugins_path(&workspace, &project, &resource)
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}
