//! Static copy for the site: documentation tabs, research pillars,
//! orchestration notes, funding lines and lab bulletins.

/// Tabs of the documentation modal, in sidebar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DocTab {
    #[default]
    Overview,
    Api,
    Ethics,
}

impl DocTab {
    pub const ALL: [DocTab; 3] = [DocTab::Overview, DocTab::Api, DocTab::Ethics];

    /// Sidebar label
    pub fn label(&self) -> &'static str {
        match self {
            DocTab::Overview => "overview",
            DocTab::Api => "api",
            DocTab::Ethics => "ethics",
        }
    }

    pub fn heading(&self) -> &'static str {
        match self {
            DocTab::Overview => "System Architecture v4.0",
            DocTab::Api => "API Core Access",
            DocTab::Ethics => "3 Core Safety Protocols",
        }
    }
}

/// The three safety protocols listed under the ethics tab.
pub const ETHICS_PROTOCOLS: [&str; 3] = [
    "Non-Destructive Evolution: AI tidak dapat mengubah core safety code-nya sendiri.",
    "Human-Centric Alignment: Setiap keputusan besar wajib divalidasi oleh validator manusia.",
    "Privacy by Architecture: Data user dienkripsi di level neuron, bahkan AION tidak bisa melihat data mentah.",
];

/// A research milestone with its completion percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Milestone {
    pub title: &'static str,
    pub progress_pct: u8,
}

/// One of the strategic research pillars on the landing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResearchPillar {
    ArtificialMind,
    MultiAgiSync,
    EthicsCore,
}

impl ResearchPillar {
    pub const ALL: [ResearchPillar; 3] = [
        ResearchPillar::ArtificialMind,
        ResearchPillar::MultiAgiSync,
        ResearchPillar::EthicsCore,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            ResearchPillar::ArtificialMind => "Artificial Mind",
            ResearchPillar::MultiAgiSync => "Multi-AGI Sync",
            ResearchPillar::EthicsCore => "Ethics Core",
        }
    }

    /// Lucide icon name used by the card
    pub fn icon(&self) -> &'static str {
        match self {
            ResearchPillar::ArtificialMind => "brain",
            ResearchPillar::MultiAgiSync => "layers",
            ResearchPillar::EthicsCore => "shield",
        }
    }

    pub fn items(&self) -> [&'static str; 3] {
        match self {
            ResearchPillar::ArtificialMind => [
                "Sistem memori jangka panjang.",
                "Logika pengambilan keputusan.",
                "Empati buatan modular.",
            ],
            ResearchPillar::MultiAgiSync => [
                "Integrasi lintas platform.",
                "Keamanan data terdesentralisasi.",
                "Protokol sinkronisasi cepat.",
            ],
            ResearchPillar::EthicsCore => [
                "Audit keamanan otomatis.",
                "Standar etika AI global.",
                "Perlindungan privasi mutlak.",
            ],
        }
    }

    /// Staggered reveal delay for the card, in seconds.
    pub fn reveal_delay(&self) -> f32 {
        match self {
            ResearchPillar::ArtificialMind => 0.0,
            ResearchPillar::MultiAgiSync => 0.1,
            ResearchPillar::EthicsCore => 0.2,
        }
    }

    /// Longer description shown in the research detail modal.
    pub fn summary(&self) -> &'static str {
        match self {
            ResearchPillar::ArtificialMind => {
                "Riset inti tentang bagaimana sistem buatan menyimpan pengalaman, menalar di atasnya, dan merespons dengan empati yang dapat diaudit."
            }
            ResearchPillar::MultiAgiSync => {
                "Lapisan koordinasi yang memungkinkan beberapa agen kognitif berbagi konteks secara aman tanpa titik kendali tunggal."
            }
            ResearchPillar::EthicsCore => {
                "Kerangka pengawasan yang memastikan setiap evolusi model tetap selaras dengan nilai manusia dan dapat ditelusuri."
            }
        }
    }

    pub fn milestones(&self) -> [Milestone; 3] {
        match self {
            ResearchPillar::ArtificialMind => [
                Milestone { title: "Long-term memory graph", progress_pct: 82 },
                Milestone { title: "Decision trace engine", progress_pct: 64 },
                Milestone { title: "Modular empathy layer", progress_pct: 37 },
            ],
            ResearchPillar::MultiAgiSync => [
                Milestone { title: "Cross-platform context bus", progress_pct: 71 },
                Milestone { title: "Decentralized key custody", progress_pct: 58 },
                Milestone { title: "Sub-ms sync protocol", progress_pct: 45 },
            ],
            ResearchPillar::EthicsCore => [
                Milestone { title: "Automated safety audit", progress_pct: 90 },
                Milestone { title: "Global ethics baseline", progress_pct: 66 },
                Milestone { title: "Neuron-level encryption", progress_pct: 52 },
            ],
        }
    }
}

/// A row of the technical orchestration section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TechItem {
    /// Lucide icon name
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const TECH_ITEMS: [TechItem; 2] = [
    TechItem {
        icon: "binary",
        title: "Agnostic Architecture",
        description: "Core AI yang tidak terikat platform, bisa diakses dari web, mobile, hingga IoT.",
    },
    TechItem {
        icon: "cpu",
        title: "Edge Processing",
        description: "Komputasi dilakukan di titik terdekat untuk meminimalkan latensi data.",
    },
];

/// Where donations go, listed on the donations page.
pub const FUNDING_LINES: [&str; 3] = ["Server Infrastructure", "Safety Audit", "Open Source Dev"];

/// A short lab news item for the landing carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bulletin {
    pub tag: &'static str,
    pub headline: &'static str,
    pub body: &'static str,
}

pub const BULLETINS: [Bulletin; 3] = [
    Bulletin {
        tag: "RELEASE",
        headline: "Cognitive Mapping v4.0.2",
        body: "1,400M parameter dimuat ulang dengan jalur umpan balik rekursif yang lebih stabil.",
    },
    Bulletin {
        tag: "AUDIT",
        headline: "Ethics Core passes Q3 review",
        body: "Validator manusia menyetujui seluruh keputusan besar pada siklus evaluasi terakhir.",
    },
    Bulletin {
        tag: "NODE",
        headline: "JKT-01 edge cluster online",
        body: "Latensi rata-rata turun ke 0.2ms untuk permintaan dari Asia Tenggara.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn doc_tabs_in_sidebar_order() {
        let labels: Vec<_> = DocTab::ALL.iter().map(DocTab::label).collect();
        assert_eq!(labels, vec!["overview", "api", "ethics"]);
        assert_eq!(DocTab::default(), DocTab::Overview);
    }

    #[test]
    fn pillar_delays_are_staggered() {
        let delays: Vec<_> = ResearchPillar::ALL.iter().map(|p| p.reveal_delay()).collect();
        assert_eq!(delays, vec![0.0, 0.1, 0.2]);
    }

    #[test]
    fn milestones_are_percentages() {
        for pillar in ResearchPillar::ALL {
            for milestone in pillar.milestones() {
                assert!(milestone.progress_pct <= 100, "{}", milestone.title);
            }
        }
    }
}
