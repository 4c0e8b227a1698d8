//! Deployment conversions
//!
//! Inbound, each concrete schema version maps into the shorthand form.
//! Outbound, the manifest is canonicalized into the generic apps/v1beta2
//! layout, stamped with the declared target version, and respecialized
//! through the wire codec into that version's own concrete type.

use manifold_core::{
    ConditionStatus, DeploymentCondition, DeploymentConditionType, DeploymentManifest,
    DeploymentStatus, ReplicaCounts, Strategy, TemplateMetadata,
};
use manifold_kube::{KubeObject, ObjectMeta, PodTemplateSpec, WireCodec, apps};

use crate::dispatch::{ensure_declared_version, resolve_target_version, respecialize};
use crate::error::{ConvertError, Result, ResultExt};
use crate::expressions::ExpressionCompiler;
use crate::selector::{apply_template_labels_override, collapse_selector, expand_selector};

/// Schema versions a deployment manifest may declare.
pub const SUPPORTED_VERSIONS: &[&str] = &["v1", "v1beta1", "v1beta2"];

/// Convert a concrete wire deployment into the shorthand form.
pub fn from_kube(
    obj: &KubeObject,
    compiler: &dyn ExpressionCompiler,
) -> Result<DeploymentManifest> {
    ensure_declared_version(obj)?;
    match obj {
        KubeObject::DeploymentV1(d) => {
            from_versioned(apps::v1::VERSION, &d.metadata, &d.spec, &d.status, compiler)
        }
        KubeObject::DeploymentV1Beta1(d) => {
            // rollbackTo is deprecated upstream and has no shorthand
            // counterpart; everything else lines up with the shared layout.
            let spec = apps::DeploymentSpec {
                replicas: d.spec.replicas,
                selector: d.spec.selector.clone(),
                template: d.spec.template.clone(),
                strategy: d.spec.strategy.clone(),
                min_ready_seconds: d.spec.min_ready_seconds,
                revision_history_limit: d.spec.revision_history_limit,
                paused: d.spec.paused,
                progress_deadline_seconds: d.spec.progress_deadline_seconds,
            };
            from_versioned(apps::v1beta1::VERSION, &d.metadata, &spec, &d.status, compiler)
        }
        KubeObject::DeploymentV1Beta2(d) => from_versioned(
            apps::v1beta2::VERSION,
            &d.metadata,
            &d.spec,
            &d.status,
            compiler,
        ),
        other => Err(ConvertError::UnknownVersion {
            observed: other.type_name().to_string(),
        }),
    }
}

fn from_versioned(
    version: &'static str,
    metadata: &ObjectMeta,
    spec: &apps::DeploymentSpec,
    status: &apps::DeploymentStatus,
    compiler: &dyn ExpressionCompiler,
) -> Result<DeploymentManifest> {
    let template_labels = spec.template.metadata.as_ref().map(|m| &m.labels);
    let (selector, labels_override) =
        collapse_selector(spec.selector.as_ref(), template_labels, compiler)
            .context("pod template")?;
    let selector = if selector.is_empty() {
        None
    } else {
        Some(selector)
    };

    let base_template = spec.template.metadata.as_ref().and_then(|m| {
        if m.name.is_empty() && m.annotations.is_empty() {
            None
        } else {
            Some(TemplateMetadata {
                name: m.name.clone(),
                labels: None,
                annotations: m.annotations.clone(),
            })
        }
    });
    let template = apply_template_labels_override(labels_override, base_template);

    Ok(DeploymentManifest {
        version: version.to_string(),
        cluster: metadata.cluster_name.clone(),
        name: metadata.name.clone(),
        namespace: metadata.namespace.clone(),
        labels: metadata.labels.clone(),
        annotations: metadata.annotations.clone(),
        replicas: spec.replicas,
        selector,
        template,
        pod: spec.template.spec.clone(),
        strategy: strategy_from_kube(&spec.strategy)?,
        min_ready_seconds: (spec.min_ready_seconds != 0).then_some(spec.min_ready_seconds),
        revision_history_limit: spec.revision_history_limit,
        progress_deadline_seconds: spec.progress_deadline_seconds,
        paused: spec.paused,
        status: status_from_kube(status)?,
    })
}

/// Convert a shorthand deployment into the concrete wire object its
/// declared version selects.
pub fn to_kube(
    manifest: &DeploymentManifest,
    compiler: &dyn ExpressionCompiler,
    codec: &dyn WireCodec,
) -> Result<KubeObject> {
    let target = resolve_target_version(&manifest.version, SUPPORTED_VERSIONS, "deployment")?;

    let stored_labels = manifest.template.as_ref().and_then(|t| t.labels.as_ref());
    let (selector, effective_labels) =
        expand_selector(manifest.selector.as_ref(), stored_labels, compiler)
            .context("pod template")?;

    let pod = manifest
        .pod
        .as_ref()
        .ok_or(ConvertError::MissingRequiredField {
            field: "pod template",
        })?;

    let template_meta =
        apply_template_labels_override(effective_labels, manifest.template.clone()).map(|t| {
            ObjectMeta {
                name: t.name,
                labels: t.labels.unwrap_or_default(),
                annotations: t.annotations,
                ..Default::default()
            }
        });

    let canonical = apps::v1beta2::Deployment {
        api_version: target,
        kind: "Deployment".into(),
        metadata: ObjectMeta {
            name: manifest.name.clone(),
            namespace: manifest.namespace.clone(),
            cluster_name: manifest.cluster.clone(),
            labels: manifest.labels.clone(),
            annotations: manifest.annotations.clone(),
        },
        spec: apps::DeploymentSpec {
            replicas: manifest.replicas,
            selector,
            template: PodTemplateSpec {
                metadata: template_meta,
                spec: Some(pod.clone()),
            },
            strategy: strategy_to_kube(manifest.strategy.as_ref()),
            min_ready_seconds: manifest.min_ready_seconds.unwrap_or_default(),
            revision_history_limit: manifest.revision_history_limit,
            paused: manifest.paused,
            progress_deadline_seconds: manifest.progress_deadline_seconds,
        },
        status: status_to_kube(&manifest.status),
    };

    let obj = respecialize(&KubeObject::DeploymentV1Beta2(canonical), codec)?;
    match obj {
        KubeObject::DeploymentV1(_)
        | KubeObject::DeploymentV1Beta1(_)
        | KubeObject::DeploymentV1Beta2(_) => Ok(obj),
        other => Err(ConvertError::UnknownVersion {
            observed: other.type_name().to_string(),
        }),
    }
}

fn strategy_from_kube(strategy: &apps::DeploymentStrategy) -> Result<Option<Strategy>> {
    match strategy.strategy_type.as_str() {
        "Recreate" => Ok(Some(Strategy::Recreate)),
        // An untyped strategy is the wire default (rolling update); only a
        // configured one is worth storing.
        "" | "RollingUpdate" => Ok(strategy.rolling_update.as_ref().map(|ru| {
            Strategy::RollingUpdate {
                max_unavailable: ru.max_unavailable.clone(),
                max_surge: ru.max_surge.clone(),
            }
        })),
        other => Err(ConvertError::UnrecognizedEnumValue {
            field: "deployment strategy type",
            value: other.to_string(),
        }),
    }
}

fn strategy_to_kube(strategy: Option<&Strategy>) -> apps::DeploymentStrategy {
    match strategy {
        None => apps::DeploymentStrategy {
            strategy_type: "RollingUpdate".into(),
            rolling_update: None,
        },
        Some(Strategy::Recreate) => apps::DeploymentStrategy {
            strategy_type: "Recreate".into(),
            rolling_update: None,
        },
        Some(Strategy::RollingUpdate {
            max_unavailable,
            max_surge,
        }) => apps::DeploymentStrategy {
            strategy_type: "RollingUpdate".into(),
            rolling_update: Some(apps::RollingUpdateDeployment {
                max_unavailable: max_unavailable.clone(),
                max_surge: max_surge.clone(),
            }),
        },
    }
}

fn status_from_kube(status: &apps::DeploymentStatus) -> Result<DeploymentStatus> {
    let mut conditions = Vec::with_capacity(status.conditions.len());
    for (i, cond) in status.conditions.iter().enumerate() {
        let cond =
            condition_from_kube(cond).with_context(|| format!("deployment conditions[{i}]"))?;
        conditions.push(cond);
    }
    Ok(DeploymentStatus {
        observed_generation: status.observed_generation,
        replicas: ReplicaCounts {
            total: status.replicas,
            updated: status.updated_replicas,
            ready: status.ready_replicas,
            available: status.available_replicas,
            unavailable: status.unavailable_replicas,
        },
        conditions,
        collision_count: status.collision_count,
    })
}

fn status_to_kube(status: &DeploymentStatus) -> apps::DeploymentStatus {
    apps::DeploymentStatus {
        observed_generation: status.observed_generation,
        replicas: status.replicas.total,
        updated_replicas: status.replicas.updated,
        ready_replicas: status.replicas.ready,
        available_replicas: status.replicas.available,
        unavailable_replicas: status.replicas.unavailable,
        conditions: status.conditions.iter().map(condition_to_kube).collect(),
        collision_count: status.collision_count,
    }
}

fn condition_from_kube(cond: &apps::DeploymentCondition) -> Result<DeploymentCondition> {
    Ok(DeploymentCondition {
        condition_type: condition_type_from_kube(&cond.condition_type)?,
        status: condition_status_from_kube(&cond.status)?,
        last_update_time: cond.last_update_time,
        last_transition_time: cond.last_transition_time,
        reason: cond.reason.clone(),
        message: cond.message.clone(),
    })
}

fn condition_to_kube(cond: &DeploymentCondition) -> apps::DeploymentCondition {
    apps::DeploymentCondition {
        condition_type: condition_type_to_kube(cond.condition_type).to_string(),
        status: condition_status_to_kube(cond.status).to_string(),
        last_update_time: cond.last_update_time,
        last_transition_time: cond.last_transition_time,
        reason: cond.reason.clone(),
        message: cond.message.clone(),
    }
}

fn condition_type_from_kube(value: &str) -> Result<DeploymentConditionType> {
    match value {
        "Available" => Ok(DeploymentConditionType::Available),
        "Progressing" => Ok(DeploymentConditionType::Progressing),
        "ReplicaFailure" => Ok(DeploymentConditionType::ReplicaFailure),
        other => Err(ConvertError::UnrecognizedEnumValue {
            field: "deployment condition type",
            value: other.to_string(),
        }),
    }
}

fn condition_type_to_kube(value: DeploymentConditionType) -> &'static str {
    match value {
        DeploymentConditionType::Available => "Available",
        DeploymentConditionType::Progressing => "Progressing",
        DeploymentConditionType::ReplicaFailure => "ReplicaFailure",
    }
}

fn condition_status_from_kube(value: &str) -> Result<ConditionStatus> {
    match value {
        "True" => Ok(ConditionStatus::True),
        "False" => Ok(ConditionStatus::False),
        // Controllers may omit the status entirely; treat that as Unknown.
        "" | "Unknown" => Ok(ConditionStatus::Unknown),
        other => Err(ConvertError::UnrecognizedEnumValue {
            field: "deployment condition status",
            value: other.to_string(),
        }),
    }
}

fn condition_status_to_kube(value: ConditionStatus) -> &'static str {
    match value {
        ConditionStatus::True => "True",
        ConditionStatus::False => "False",
        ConditionStatus::Unknown => "Unknown",
    }
}
