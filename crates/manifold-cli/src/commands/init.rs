//! Init command - scaffold a starter shorthand project

use console::style;
use manifold_core::{DeploymentManifest, LabelSet, Manifest, NamespaceManifest, Selector};
use miette::{IntoDiagnostic, Result, WrapErr};
use std::fs;
use std::path::Path;

pub fn run(name: &str, output: &Path) -> Result<()> {
    let project_dir = output.join(name);

    if project_dir.exists() {
        return Err(miette::miette!(
            "Directory {} already exists",
            project_dir.display()
        ));
    }

    let manifests_dir = project_dir.join("manifests");
    fs::create_dir_all(&manifests_dir)
        .into_diagnostic()
        .wrap_err("Failed to create manifests directory")?;

    // The starter documents go through the shorthand types themselves, so
    // the scaffold is guaranteed to parse back.
    let deployment = starter_deployment(name);
    let deployment_yaml = serde_yaml::to_string(&deployment)
        .into_diagnostic()
        .wrap_err("Failed to render starter deployment")?;
    fs::write(manifests_dir.join("deployment.yaml"), deployment_yaml)
        .into_diagnostic()
        .wrap_err("Failed to write deployment.yaml")?;

    let namespace = Manifest::Namespace(NamespaceManifest {
        version: "v1".into(),
        name: name.to_string(),
        ..Default::default()
    });
    let namespace_yaml = serde_yaml::to_string(&namespace)
        .into_diagnostic()
        .wrap_err("Failed to render starter namespace")?;
    fs::write(manifests_dir.join("namespace.yaml"), namespace_yaml)
        .into_diagnostic()
        .wrap_err("Failed to write namespace.yaml")?;

    let gitignore = "# Manifold\nout/\n";
    fs::write(project_dir.join(".gitignore"), gitignore)
        .into_diagnostic()
        .wrap_err("Failed to write .gitignore")?;

    println!(
        "{} Created project {} at {}",
        style("✓").green().bold(),
        style(name).cyan(),
        style(project_dir.display()).dim()
    );

    println!();
    println!("Next steps:");
    println!(
        "  1. Edit the shorthand documents in {}",
        style("manifests/").cyan()
    );
    println!(
        "  2. Add more resources as one document per file (deployment, namespace, secret)"
    );

    Ok(())
}

fn starter_deployment(name: &str) -> Manifest {
    let labels: LabelSet = [("app".to_string(), name.to_string())].into_iter().collect();
    let pod = serde_yaml::from_str(concat!(
        "containers:\n",
        "- name: app\n",
        "  image: nginx:latest\n",
        "  ports:\n",
        "  - containerPort: 80\n",
    ))
    .unwrap_or(serde_yaml::Value::Null);

    Manifest::Deployment(DeploymentManifest {
        version: "v1".into(),
        name: name.to_string(),
        namespace: name.to_string(),
        labels: labels.clone(),
        replicas: Some(1),
        selector: Some(Selector::Explicit(labels)),
        pod: Some(pod),
        ..Default::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn scaffolds_parseable_shorthand() {
        let tmp = TempDir::new().unwrap();
        run("web", tmp.path()).unwrap();

        let manifests = tmp.path().join("web/manifests");
        let deployment = fs::read_to_string(manifests.join("deployment.yaml")).unwrap();
        let doc: Manifest = serde_yaml::from_str(&deployment).unwrap();
        assert_eq!(doc.kind(), "deployment");

        let namespace = fs::read_to_string(manifests.join("namespace.yaml")).unwrap();
        let doc: Manifest = serde_yaml::from_str(&namespace).unwrap();
        assert_eq!(doc.kind(), "namespace");

        assert!(tmp.path().join("web/.gitignore").exists());
    }

    #[test]
    fn refuses_to_overwrite() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("web")).unwrap();
        assert!(run("web", tmp.path()).is_err());
    }
}
