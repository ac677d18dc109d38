use std::fmt;

/// One of the five hardware categories the form asks for.
///
/// Each category owns one selection control on the page, one list endpoint
/// and one query parameter on the compatibility request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ComponentCategory {
    Cpu,
    Gpu,
    Motherboard,
    Memory,
    Psu,
}

impl ComponentCategory {
    /// All categories in query-string order
    pub const ALL: [ComponentCategory; 5] = [
        ComponentCategory::Cpu,
        ComponentCategory::Gpu,
        ComponentCategory::Motherboard,
        ComponentCategory::Memory,
        ComponentCategory::Psu,
    ];

    /// Identifier of the selection control bound to this category
    pub fn control_id(self) -> &'static str {
        match self {
            ComponentCategory::Cpu => "cpu-select",
            ComponentCategory::Gpu => "gpu-select",
            ComponentCategory::Motherboard => "mobo-select",
            ComponentCategory::Memory => "ram-select",
            ComponentCategory::Psu => "psu-select",
        }
    }

    /// Default list endpoint for this category
    pub fn default_endpoint(self) -> &'static str {
        match self {
            ComponentCategory::Cpu => "/api/cpus",
            ComponentCategory::Gpu => "/api/gpus",
            ComponentCategory::Motherboard => "/api/motherboards",
            ComponentCategory::Memory => "/api/memory",
            ComponentCategory::Psu => "/api/psus",
        }
    }

    /// Query parameter name used on the compatibility request
    pub fn query_param(self) -> &'static str {
        match self {
            ComponentCategory::Cpu => "cpu",
            ComponentCategory::Gpu => "gpu",
            ComponentCategory::Motherboard => "motherboard",
            ComponentCategory::Memory => "memory",
            ComponentCategory::Psu => "psu",
        }
    }

    pub fn from_control_id(control_id: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|category| category.control_id() == control_id)
    }
}

impl fmt::Display for ComponentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ComponentCategory::Cpu => "CPU",
            ComponentCategory::Gpu => "GPU",
            ComponentCategory::Motherboard => "Motherboard",
            ComponentCategory::Memory => "Memory",
            ComponentCategory::Psu => "PSU",
        };
        f.write_str(name)
    }
}
