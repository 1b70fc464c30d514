use dioxus::prelude::*;

use crate::{
    domain::{Directory, DirectoryState},
    infra::dataset::{self, DatasetSource, LoadedDataset},
    ui::{
        components::toast::{toast_stack, Toast, ToastKind, ToastMessage},
        pages::DirectoryPage,
        shell::Shell,
    },
    util::{
        assets,
        config::{app_config, AppConfig},
    },
};

#[derive(Routable, Clone, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
}

/// Directory snapshot plus the notices raised while loading it.
#[derive(Clone)]
struct Startup {
    directory: Directory,
    notices: Vec<ToastMessage>,
}

impl Startup {
    fn load(config: &AppConfig) -> Self {
        match dataset::load_dataset(config) {
            Ok(dataset) => {
                let notices = load_notices(&dataset);
                Self {
                    directory: Directory::new(dataset.companies),
                    notices,
                }
            }
            Err(err) => {
                tracing::error!(%err, "no company dataset available");
                Self {
                    directory: Directory::default(),
                    notices: vec![ToastMessage::new(
                        ToastKind::Error,
                        format!("Impossible de charger l'annuaire : {err}"),
                    )],
                }
            }
        }
    }
}

fn load_notices(dataset: &LoadedDataset) -> Vec<ToastMessage> {
    let mut notices = Vec::new();
    if let Some(reason) = &dataset.override_error {
        notices.push(ToastMessage::new(
            ToastKind::Warning,
            format!("Fichier de données ignoré ({reason}) ; annuaire intégré utilisé."),
        ));
    } else if let DatasetSource::File(path) = &dataset.report.source {
        notices.push(ToastMessage::new(
            ToastKind::Info,
            format!("Annuaire chargé depuis {}.", path.display()),
        ));
    }
    if !dataset.report.skipped.is_empty() {
        notices.push(ToastMessage::new(
            ToastKind::Warning,
            format!(
                "{} fiche(s) incomplète(s) écartée(s) de {}.",
                dataset.report.skipped.len(),
                dataset.report.source
            ),
        ));
    }
    notices
}

#[component]
pub fn App() -> Element {
    let startup = use_hook(|| Startup::load(app_config()));

    let toasts = use_signal(|| toast_stack(startup.notices.clone()));
    use_context_provider(|| toasts);

    let state = use_signal(|| DirectoryState::new(startup.directory.clone()));
    use_context_provider(|| state);

    rsx! {
        document::Link { rel: "icon", href: assets::favicon_data_uri() }
        document::Style { "{assets::main_css()}" }
        Router::<Route> {}
        Toast {}
    }
}

#[component]
pub fn Home() -> Element {
    rsx! { Shell { DirectoryPage {} } }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::infra::dataset::parse_companies;

    #[test]
    fn clean_dataset_raises_no_notices() {
        let dataset = parse_companies(
            r#"[{"name": "EPAL", "headquarters": "Alger"}]"#,
            DatasetSource::Bundled,
        )
        .unwrap();
        assert!(load_notices(&dataset).is_empty());
    }

    #[test]
    fn skipped_records_and_failed_override_are_reported() {
        let mut dataset = parse_companies(
            r#"[{"name": "EPAL"}, {"name": "EPO", "headquarters": "Oran"}]"#,
            DatasetSource::File(PathBuf::from("companies.json")),
        )
        .unwrap();
        dataset.override_error = Some("introuvable".to_string());

        let notices = load_notices(&dataset);
        assert_eq!(notices.len(), 2);
        assert!(notices.iter().all(|n| n.kind == ToastKind::Warning));
        assert!(notices[1].text.starts_with("1 fiche(s)"));
    }

    #[test]
    fn override_file_in_use_is_announced() {
        let dataset = parse_companies(
            r#"[{"name": "EPO", "headquarters": "Oran"}]"#,
            DatasetSource::File(PathBuf::from("companies.json")),
        )
        .unwrap();
        let notices = load_notices(&dataset);
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].kind, ToastKind::Info);
        assert!(notices[0].text.contains("companies.json"));
    }

    #[test]
    fn startup_falls_back_to_bundled_directory() {
        let config = AppConfig {
            dataset_path: Some(PathBuf::from("/nonexistent/companies.json")),
            ..AppConfig::default()
        };
        let startup = Startup::load(&config);
        assert!(!startup.directory.is_empty());
        assert_eq!(startup.notices.len(), 1);
    }
}
