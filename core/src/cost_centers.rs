//! Cost-center dimension.
//!
//! A fixed ordered list of six named departments as a prefix; counts beyond
//! that get generic `DeptK` names. Deterministic, no randomness.

use crate::types::CostCenterId;
use serde::{Deserialize, Serialize};

const BASE_DEPARTMENTS: [&str; 6] = ["Sales", "Marketing", "Operations", "IT", "HR", "HQ"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostCenter {
    pub cost_center_id: CostCenterId,
    pub department: String,
    pub country: String,
    pub manager: String,
}

pub fn generate_cost_centers(count: usize) -> Vec<CostCenter> {
    let mut departments: Vec<String> = BASE_DEPARTMENTS
        .iter()
        .take(count)
        .map(|d| d.to_string())
        .collect();
    for k in BASE_DEPARTMENTS.len() + 1..=count {
        departments.push(format!("Dept{k}"));
    }

    departments
        .into_iter()
        .enumerate()
        .map(|(i, department)| CostCenter {
            cost_center_id: i as CostCenterId + 1,
            manager: format!("Manager {department}"),
            country: "DE".to_string(),
            department,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_six_are_the_named_departments() {
        let centers = generate_cost_centers(6);
        let names: Vec<&str> = centers.iter().map(|c| c.department.as_str()).collect();
        assert_eq!(names, BASE_DEPARTMENTS);
        assert!(centers.iter().all(|c| c.country == "DE"));
        assert_eq!(centers[0].manager, "Manager Sales");
    }

    #[test]
    fn small_count_truncates_prefix() {
        let centers = generate_cost_centers(3);
        let names: Vec<&str> = centers.iter().map(|c| c.department.as_str()).collect();
        assert_eq!(names, ["Sales", "Marketing", "Operations"]);
    }

    #[test]
    fn large_count_appends_generic_departments() {
        let centers = generate_cost_centers(8);
        assert_eq!(centers[6].department, "Dept7");
        assert_eq!(centers[7].department, "Dept8");
        assert_eq!(centers[7].cost_center_id, 8);
        assert_eq!(centers[7].manager, "Manager Dept8");
    }
}
