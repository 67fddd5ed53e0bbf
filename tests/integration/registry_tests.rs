//! Registry integration tests
//!
//! Concurrent writers and readers sharing one registry.

#[cfg(test)]
mod tests {
    use health_rs::{StatusLevel, StatusRegistry};
    use serde_json::json;
    use std::sync::Arc;
    use std::thread;

    // ==================== Concurrency Tests ====================

    /// Test writers on distinct names all land
    #[test]
    fn test_concurrent_distinct_writers() {
        let registry = Arc::new(StatusRegistry::new());

        let handles: Vec<_> = (0..8)
            .map(|worker| {
                let registry = Arc::clone(&registry);
                thread::spawn(move || {
                    for i in 0..100 {
                        registry.add(
                            &format!("worker-{}.job {}", worker, i),
                            Some(StatusLevel::Ok),
                            Some(json!(i)),
                            None,
                        );
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(registry.len(), 800);
        let stat = registry.get("worker-3.job 42").unwrap();
        assert_eq!(stat.name, "worker_3:job_42");
        assert_eq!(stat.value, Some(json!(42)));
    }

    /// Test readers and removers interleave with writers without losing
    /// the final state
    #[test]
    fn test_concurrent_mixed_operations() {
        let registry = Arc::new(StatusRegistry::new());
        registry.add("shared", Some(StatusLevel::Ok), None, None);

        thread::scope(|scope| {
            for _ in 0..4 {
                scope.spawn(|| {
                    for i in 0..200 {
                        registry.add(&format!("tmp.{}", i), Some(StatusLevel::Warning), None, None);
                        let _ = registry.keys();
                        let _ = registry.get("shared");
                        let _ = registry.remove(&format!("tmp.{}", i));
                    }
                });
            }
        });

        assert_eq!(registry.keys(), vec!["shared".to_string()]);
        assert_eq!(registry.get("shared").unwrap().status, Some(StatusLevel::Ok));
    }

    /// Test a removed entry is gone for every later caller
    #[test]
    fn test_remove_then_lookup() {
        let registry = StatusRegistry::new();
        registry.add("disk usage", Some(StatusLevel::Critical), Some(json!("97%")), Some(json!("80%")));

        let removed = registry.remove("disk usage").unwrap();
        assert_eq!(removed.expected_value, Some(json!("80%")));
        assert!(registry.get("disk usage").unwrap_err().is_not_found());
        assert!(registry.remove("disk usage").unwrap_err().is_not_found());
        assert!(registry.is_empty());
    }
}
