//! Deterministic synthetic chart configurations.
//!
//! Used when an OCI reference cannot be pulled because no chart tool is
//! installed. Well-known charts get a tailored preset; everything else
//! gets a generic workload shape so the rest of the pipeline proceeds
//! uniformly.

/// Render the synthetic `values.yaml` content for a chart name.
pub fn preset_values(chart_name: &str) -> String {
    match chart_name.to_lowercase().as_str() {
        "ollama" => OLLAMA_PRESET.to_string(),
        "prometheus" => PROMETHEUS_PRESET.to_string(),
        "grafana" => GRAFANA_PRESET.to_string(),
        _ => generic_preset(chart_name),
    }
}

const OLLAMA_PRESET: &str = r#"# Ollama Configuration
replicaCount: 1

image:
  repository: ollama/ollama
  tag: "latest"
  pullPolicy: IfNotPresent

service:
  type: LoadBalancer
  port: 11434

resources:
  requests:
    memory: 2Gi
    cpu: 1000m
  limits:
    memory: 8Gi
    cpu: 4000m

persistence:
  enabled: true
  size: 20Gi
  storageClass: ""

ollama:
  models:
    - llama2
    - mistral
  gpu:
    enabled: false
    count: 1

autoscaling:
  enabled: false
  minReplicas: 1
  maxReplicas: 3
  targetCPUUtilizationPercentage: 80
"#;

const PROMETHEUS_PRESET: &str = r#"# Prometheus Configuration
replicaCount: 1

image:
  repository: prom/prometheus
  tag: "latest"
  pullPolicy: IfNotPresent

service:
  type: LoadBalancer
  port: 9090

persistence:
  enabled: true
  size: 50Gi
  storageClass: ""

resources:
  requests:
    memory: 1Gi
    cpu: 500m
  limits:
    memory: 4Gi
    cpu: 2000m

retention: "30d"
scrapeInterval: "30s"
"#;

const GRAFANA_PRESET: &str = r#"# Grafana Configuration
replicaCount: 1

image:
  repository: grafana/grafana
  tag: "latest"
  pullPolicy: IfNotPresent

service:
  type: LoadBalancer
  port: 3000

adminUser: admin
adminPassword: admin

persistence:
  enabled: true
  size: 10Gi
  storageClass: ""

resources:
  requests:
    memory: 256Mi
    cpu: 100m
  limits:
    memory: 1Gi
    cpu: 500m
"#;

fn generic_preset(chart_name: &str) -> String {
    format!(
        r#"# {chart_name} Configuration
replicaCount: 3

image:
  repository: {chart_name}
  tag: "latest"
  pullPolicy: IfNotPresent

service:
  type: LoadBalancer
  port: 8080

resources:
  requests:
    memory: 256Mi
    cpu: 100m
  limits:
    memory: 512Mi
    cpu: 500m

persistence:
  enabled: true
  size: 10Gi
  storageClass: ""

autoscaling:
  enabled: false
  minReplicas: 2
  maxReplicas: 10
  targetCPUUtilizationPercentage: 80

ingress:
  enabled: false
  className: nginx
  host: ""
  tls:
    enabled: false
    secretName: ""
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chartq_domain::ConfigTree;

    fn parse(name: &str) -> ConfigTree {
        serde_yaml::from_str(&preset_values(name)).unwrap()
    }

    #[test]
    fn test_ollama_preset_shape() {
        let tree = parse("ollama");
        for key in ["replicaCount", "image", "service", "resources", "persistence", "ollama"] {
            assert!(tree.contains_path(key), "missing key {key}");
        }
        assert!(tree.contains_path("ollama.gpu.enabled"));
    }

    #[test]
    fn test_prometheus_preset_shape() {
        let tree = parse("prometheus");
        for key in ["replicaCount", "image", "service", "persistence", "resources", "retention"] {
            assert!(tree.contains_path(key), "missing key {key}");
        }
    }

    #[test]
    fn test_generic_preset_shape() {
        let tree = parse("unknown-chart");
        for key in ["replicaCount", "image", "service", "resources", "persistence", "autoscaling"] {
            assert!(tree.contains_path(key), "missing key {key}");
        }
    }

    #[test]
    fn test_presets_are_deterministic() {
        assert_eq!(preset_values("x"), preset_values("x"));
        assert_eq!(preset_values("Ollama"), preset_values("ollama"));
    }
}
