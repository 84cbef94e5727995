//! Installed Plugin Settings - View Component

use super::view_model::InstalledPluginSettingsVm;
use crate::domain::a001_plugin_installation::ui::plugin_logo::PluginLogo;
use crate::shared::components::{BackNavigation, Notification};
use crate::shared::icons::icon;
use crate::shared::json_editor::{EditorChange, JsonEditor};
use crate::shared::select_menu::SelectMenu;
use contracts::domain::a001_plugin_installation::aggregate::{PluginInstallationId, ResourceId};
use contracts::domain::a002_plugin_catalog::aggregate::PluginVersion;
use leptos::prelude::*;
use thaw::*;

#[component]
#[allow(non_snake_case)]
pub fn InstalledPluginSettings(
    resource_id: ResourceId,
    installation_id: PluginInstallationId,
    /// Target of the "Back to Plugins" link
    #[prop(into)]
    back_to: Signal<String>,
) -> impl IntoView {
    let vm = InstalledPluginSettingsVm::new(resource_id, installation_id);

    // (Re)initialize whenever installation data arrives
    Effect::new(move |_| {
        if let Some(installation) = vm.plugins.plugin_installation.get() {
            vm.init_from_installation(&installation);
        }
    });

    let on_editor_change = Callback::new(move |(text, change): (String, EditorChange)| {
        vm.on_editor_change(text, change);
    });
    let on_select_version = Callback::new(move |version: PluginVersion| {
        vm.select_version(version);
    });

    let save_disabled =
        Signal::derive(move || !vm.can_save.get() || vm.plugins.updating.get());
    // Saved data re-initializes the editor, so nothing may change meanwhile
    let locked = Signal::derive(move || vm.saving.get() || vm.plugins.updating.get());

    let ready = Memo::new(move |_| {
        !vm.is_loading() && vm.plugins.plugin_installation.with(Option::is_some)
    });

    let content = move || {
        let Some(plugin) = vm.plugin.get().filter(|_| ready.get()) else {
            return view! { <div class="installed-plugin-settings__loading">"loading"</div> }
                .into_any();
        };

        view! {
            <div class="installed-plugin-settings__row" style="display: flex; align-items: center; gap: 12px; margin-bottom: 12px;">
                <PluginLogo name=plugin.name.clone() icon_url=plugin.icon.clone() />
                <h2 class="installed-plugin-settings__name" style="font-size: 20px; font-weight: bold;">
                    {plugin.name.clone()}
                </h2>
            </div>
            <div class="installed-plugin-settings__column" style="display: flex; flex-direction: column; gap: 12px;">
                <span class="installed-plugin-settings__description">{plugin.description.clone()}</span>
                <div class="installed-plugin-settings__row" style="display: flex; align-items: center; gap: 12px;">
                    <label class="form__label installed-plugin-settings__label-title">"Plugin Version"</label>
                    <SelectMenu
                        title=Signal::derive(move || vm.menu_title())
                        items=Signal::derive(move || vm.version_items())
                        on_select=on_select_version
                        disabled=locked
                    />
                </div>
            </div>
            <hr style="margin: 16px 0; border: none; border-top: 1px solid var(--color-border);" />
            <JsonEditor handle=vm.editor on_change=on_editor_change readonly=locked />
            <div class="installed-plugin-settings__row" style="display: flex; justify-content: space-between; margin-top: 12px;">
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| vm.reset()
                    disabled=locked
                >
                    {icon("rotate-ccw")}
                    " Reset to default"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| vm.save()
                    disabled=save_disabled
                >
                    {icon("save")}
                    " Save"
                </Button>
            </div>
        }
            .into_any()
    };

    view! {
        <div class="installed-plugin-settings" style="padding: 20px; max-width: 960px;">
            <div class="installed-plugin-settings__row" style="margin-bottom: 16px;">
                <BackNavigation to=back_to label="Back to Plugins" />
            </div>
            {content}
            <Notification
                open=Signal::derive(move || vm.notification_open())
                message=Signal::derive(move || vm.notification_message())
            />
        </div>
    }
}
