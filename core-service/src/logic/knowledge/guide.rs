//! Digital Safety Guide (static content)

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct GuideSection {
    pub title: &'static str,
    pub body: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct RecommendedTool {
    pub name: &'static str,
    pub note: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SafetyGuide {
    pub title: &'static str,
    pub summary: &'static str,
    pub sections: &'static [GuideSection],
    pub tools: &'static [RecommendedTool],
    pub emergency_steps: &'static [&'static str],
    pub clinic_url: &'static str,
}

const SECTIONS: &[GuideSection] = &[
    GuideSection {
        title: "Kill Switch is Mandatory",
        body: "Always enable the \"Kill Switch\" feature in your VPN settings. This ensures that if your VPN connection drops, your internet is cut off immediately, preventing your real IP from leaking to the ISP.",
    },
    GuideSection {
        title: "Avoid Standard Protocols",
        body: "Standard protocols like OpenVPN (UDP/TCP) and IKEv2 are easily detected by the military's Deep Packet Inspection (DPI) equipment. Use protocols designed for obfuscation like V2Ray (VMess/VLESS), Shadowsocks, or Trojan.",
    },
    GuideSection {
        title: "Mobile Data Safety",
        body: "Mobile operators (MPT, Atom, Ooredoo, Mytel) are under strict junta control. They log SMS and location data. Use Signal or Telegram (with hidden number) for communication. Avoid regular SMS for sensitive OTPs if possible.",
    },
    GuideSection {
        title: "Public Wi-Fi Risks",
        body: "Never use public Wi-Fi (cafes, hotels) without a VPN. These networks are often monitored. If your VPN fails to connect on public Wi-Fi, do not proceed with sensitive activities.",
    },
    GuideSection {
        title: "Spring Security Clinic",
        body: "ဒစ်ဂျစ်တယ်လုံခြုံရေး ဆေးခန်း - ကိုယ့်လူတို့ရဲ့ ဒစ်ဂျစ်တယ်လုံခြုံရေးပြဿနာတွေကို ၂၄ နာရီလုံး အခမဲ့ ဖြေရှင်းပေးနေပါတယ်။ လုံခြုံရေးအတွက် Telegram ကနေသာ မေးခွန်းတွေ လက်ခံပေးနေပါတယ်။",
    },
];

const TOOLS: &[RecommendedTool] = &[
    RecommendedTool {
        name: "Outline VPN",
        note: "Easy to set up your own server. Hard to detect.",
        link: Some("https://engagemedia.org/2025/drapacvpn/"),
    },
    RecommendedTool {
        name: "Orbot (Tor)",
        note: "High anonymity, use with Bridges.",
        link: None,
    },
    RecommendedTool {
        name: "v2rayNG / V2Box",
        note: "Best for advanced users using V2Ray.",
        link: None,
    },
    RecommendedTool {
        name: "Signal",
        note: "For encrypted messaging.",
        link: None,
    },
];

const EMERGENCY_STEPS: &[&str] = &[
    "Power off the device immediately.",
    "Remove the SIM card.",
    "Do not use biometrics (fingerprint/face) to unlock.",
];

pub fn safety_guide() -> SafetyGuide {
    SafetyGuide {
        title: "Digital Safety in Myanmar",
        summary: "Essential checklist for staying safe online under surveillance.",
        sections: SECTIONS,
        tools: TOOLS,
        emergency_steps: EMERGENCY_STEPS,
        clinic_url: "https://t.me/SpringSecClinic",
    }
}
