use serde::Serialize;

/// A reporting region and the coordination desk that owns its capture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Region {
    pub id: &'static str,
    pub name: &'static str,
    pub editor: &'static str,
}

/// Smallest reporting entity on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BusinessUnit {
    pub id: &'static str,
    pub name: &'static str,
    pub region_id: &'static str,
}

/// Fixed organizational catalog the dashboard reports over. Reference data
/// only; it stores no entries.
#[derive(Debug, Clone)]
pub struct RegionDirectory {
    regions: Vec<Region>,
    units: Vec<BusinessUnit>,
}

impl RegionDirectory {
    pub fn standard() -> Self {
        let regions = vec![
            Region {
                id: "R1",
                name: "CENTRO",
                editor: "COORDINACION CENTRO",
            },
            Region {
                id: "R2",
                name: "CENTRO NORTE",
                editor: "COORDINACION CENTRO NORTE",
            },
            Region {
                id: "R3",
                name: "SUR",
                editor: "COORDINACION SUR",
            },
            Region {
                id: "R4",
                name: "FRONTERA NORTE",
                editor: "COORDINACION FRONTERA NORTE",
            },
            Region {
                id: "R5",
                name: "TSP+",
                editor: "COORDINACION TSP+",
            },
        ];

        let units = vec![
            BusinessUnit {
                id: "U1",
                name: "METRO CENTRO",
                region_id: "R1",
            },
            BusinessUnit {
                id: "U2",
                name: "METRO SUR",
                region_id: "R1",
            },
            BusinessUnit {
                id: "U3",
                name: "METRO NORTE",
                region_id: "R1",
            },
            BusinessUnit {
                id: "U4",
                name: "TOLUCA",
                region_id: "R1",
            },
            BusinessUnit {
                id: "U5",
                name: "GTMI",
                region_id: "R2",
            },
            BusinessUnit {
                id: "U6",
                name: "OCCIDENTE",
                region_id: "R2",
            },
            BusinessUnit {
                id: "U7",
                name: "BAJIO",
                region_id: "R2",
            },
            BusinessUnit {
                id: "U8",
                name: "SLP",
                region_id: "R2",
            },
            BusinessUnit {
                id: "U9",
                name: "SUR",
                region_id: "R3",
            },
            BusinessUnit {
                id: "U10",
                name: "GOLFO",
                region_id: "R3",
            },
            BusinessUnit {
                id: "U11",
                name: "PENINSULA",
                region_id: "R3",
            },
            BusinessUnit {
                id: "U12",
                name: "PACIFICO",
                region_id: "R4",
            },
            BusinessUnit {
                id: "U13",
                name: "NOROESTE",
                region_id: "R4",
            },
            BusinessUnit {
                id: "U14",
                name: "NORESTE",
                region_id: "R4",
            },
            BusinessUnit {
                id: "U15",
                name: "TSP+",
                region_id: "R5",
            },
        ];

        Self { regions, units }
    }

    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    pub fn units(&self) -> &[BusinessUnit] {
        &self.units
    }

    /// Units of one region in directory order.
    pub fn units_of(&self, region_id: &str) -> Vec<&BusinessUnit> {
        self.units
            .iter()
            .filter(|unit| unit.region_id == region_id)
            .collect()
    }

    pub fn unit(&self, unit_id: &str) -> Option<&BusinessUnit> {
        self.units.iter().find(|unit| unit.id == unit_id)
    }

    pub fn region_of(&self, unit_id: &str) -> Option<&Region> {
        let unit = self.unit(unit_id)?;
        self.regions.iter().find(|region| region.id == unit.region_id)
    }
}
