//! Static showcase content

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Certification {
    pub title: &'static str,
    pub image: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
}

pub fn certifications() -> Vec<Certification> {
    vec![
        Certification {
            title: "7 Layers",
            image: "/assets/images/layers.png",
            description: "7 Layers is a veteran-owned and operated business specializing in penetration testing, \
                          adversary emulation, and security awareness. Their comprehensive evaluation confirms \
                          our commitment to protecting your data.",
        },
        Certification {
            title: "Horizon Security",
            image: "/assets/images/horizon.png",
            description: "Horizon Security has validated our security infrastructure through rigorous testing \
                          protocols. Their certification demonstrates our dedication to maintaining a secure \
                          environment.",
        },
        Certification {
            title: "SSE",
            image: "/assets/images/sse.png",
            description: "Security Service Edge (SSE) certification ensures our platform meets stringent security \
                          standards, providing robust protection for your data and applications.",
        },
    ]
}

pub fn features() -> Vec<Feature> {
    vec![
        Feature {
            title: "Unbreachable Security",
            description: "Ensure absolute protection for critical assets by preventing unauthorized access and cyber threats.",
            image: "/assets/images/feature-two.svg",
        },
        Feature {
            title: "Complete Network Isolation",
            description: "Secure IT and OT environments with advanced unidirectional data flow, eliminating external attack vectors.",
            image: "/assets/images/feature-one.svg",
        },
        Feature {
            title: "Data Integrity Assurance",
            description: "Prevent data breaches and unauthorized data transmission with our intelligent cybersecurity solutions.",
            image: "/assets/images/feature-three.svg",
        },
        Feature {
            title: "Stealth Protection",
            description: "Keep your systems invisible to cyber threats by ensuring no direct exposure to external networks.",
            image: "/assets/images/feature-four.svg",
        },
        Feature {
            title: "Real-Time Threat Prevention",
            description: "Eliminate cyber risks instantly with proactive, data diode-driven security mechanisms.",
            image: "/assets/images/feature-five.svg",
        },
    ]
}
