//! Legal documents rendered by the privacy, terms and license pages.

#[derive(Debug, PartialEq)]
pub struct PolicySection {
    pub title: &'static str,
    pub paragraphs: &'static [&'static str],
    /// Bullet list rendered under the paragraphs, empty for most sections.
    pub bullets: &'static [&'static str],
}

#[derive(Debug, PartialEq)]
pub struct LegalDocument {
    pub title: &'static str,
    pub last_updated: Option<&'static str>,
    pub intro: Option<&'static str>,
    pub sections: &'static [PolicySection],
    pub questions_heading: &'static str,
    pub questions_text: &'static str,
}

const LAST_UPDATED: &str = "November 1, 2024";

const fn section(title: &'static str, paragraphs: &'static [&'static str]) -> PolicySection {
    PolicySection { title, paragraphs, bullets: &[] }
}

pub static PRIVACY_POLICY: LegalDocument = LegalDocument {
    title: "Privacy Policy",
    last_updated: Some(LAST_UPDATED),
    intro: Some("At Mitchy, we take your privacy seriously. This Privacy Policy explains how we collect, use, disclose, and safeguard your information when you use our services."),
    sections: &[
        section("Information We Collect", &[
            "We collect information you provide directly to us when you create an account, fill out a form, or communicate with us. This may include your name, email address, company name, phone number, and any other information you choose to provide.",
            "We automatically collect certain information about your device when you use our services, including your IP address, browser type, operating system, referring URLs, and pages visited.",
        ]),
        section("How We Use Your Information", &[
            "We use the information we collect to provide, maintain, and improve our services, including to process your requests, send you technical notices and support messages, and respond to your comments and questions.",
            "We may use your information to communicate with you about products, services, offers, and events, and provide news and information we think will be of interest to you.",
            "We use analytics to understand how our services are used and to improve user experience.",
        ]),
        section("Information Sharing and Disclosure", &[
            "We do not share your personal information with third parties except as described in this privacy policy.",
            "We may share your information with service providers who perform services on our behalf, such as hosting providers, analytics providers, and customer support services.",
            "We may disclose your information if required by law or in response to valid requests by public authorities.",
        ]),
        section("Data Security", &[
            "We take reasonable measures to help protect your personal information from loss, theft, misuse, unauthorized access, disclosure, alteration, and destruction.",
            "However, no Internet or email transmission is ever fully secure or error-free. Please keep this in mind when disclosing any personal information to us.",
        ]),
        section("Your Rights and Choices", &[
            "You may update, correct, or delete your account information at any time by logging into your account or contacting us directly.",
            "You may opt out of receiving promotional communications from us by following the instructions in those communications.",
            "If you are a resident of the European Economic Area, you have certain rights under the GDPR, including the right to access, correct, or delete your personal data.",
        ]),
        section("Cookies and Tracking Technologies", &[
            "We use cookies and similar tracking technologies to collect and track information about your use of our services and to improve your experience.",
            "You can instruct your browser to refuse all cookies or to indicate when a cookie is being sent. However, if you do not accept cookies, you may not be able to use some portions of our services.",
        ]),
        section("Children's Privacy", &[
            "Our services are not directed to children under 13 (or other age as required by local law), and we do not knowingly collect personal information from children.",
            "If you learn that a child has provided us with personal information without parental consent, please contact us.",
        ]),
        section("Changes to This Privacy Policy", &[
            "We may update this privacy policy from time to time. If we make material changes, we will notify you by email or by posting a notice on our website prior to the change becoming effective.",
            "We encourage you to review this privacy policy periodically to stay informed about our information practices.",
        ]),
    ],
    questions_heading: "Questions about our privacy policy?",
    questions_text: "If you have any questions or concerns about this Privacy Policy, please don't hesitate to contact us.",
};

pub static TERMS_OF_SERVICE: LegalDocument = LegalDocument {
    title: "Terms of Service",
    last_updated: Some(LAST_UPDATED),
    intro: Some("Please read these terms of service carefully before using our services. By using Mitchy's services, you agree to be bound by these terms."),
    sections: &[
        section("Acceptance of Terms", &[
            "By accessing and using Mitchy's services, you accept and agree to be bound by the terms and provision of this agreement. If you do not agree to these terms, please do not use our services.",
            "We reserve the right to update and change these Terms of Service without notice. Continued use of the service after any such changes shall constitute your consent to such changes.",
        ]),
        section("Description of Service", &[
            "Mitchy provides digital design, development, branding, and marketing services through a subscription-based model. The service includes unlimited design requests, revisions, and support as outlined in your subscription plan.",
            "We reserve the right to modify, suspend, or discontinue any aspect of the service at any time, with or without notice.",
        ]),
        section("User Responsibilities", &[
            "You are responsible for maintaining the confidentiality of your account credentials and for all activities that occur under your account.",
            "You agree to provide accurate, current, and complete information during the registration process and to update such information to keep it accurate, current, and complete.",
            "You agree not to use the service for any illegal purposes or in any way that could damage, disable, overburden, or impair our servers or networks.",
        ]),
        section("Intellectual Property Rights", &[
            "Upon full payment for our services, you own all rights to the final deliverables we create for you, including designs, code, and other creative assets.",
            "We retain the right to showcase completed work in our portfolio and marketing materials unless otherwise agreed upon in writing.",
            "All source files, research, concepts, and preliminary designs remain the property of Mitchy unless explicitly transferred in your agreement.",
        ]),
        section("Payment Terms", &[
            "Subscription fees are billed monthly in advance. All fees are non-refundable except as required by law.",
            "You authorize us to charge your chosen payment method on a recurring basis. You are responsible for ensuring your payment information is current and accurate.",
            "If payment fails, we reserve the right to suspend or terminate your access to the service.",
        ]),
        section("Cancellation and Refunds", &[
            "You may cancel your subscription at any time. Cancellation will take effect at the end of your current billing period.",
            "No refunds will be provided for partial months of service or unused service time.",
            "We reserve the right to terminate your account for violation of these terms or for any other reason at our discretion.",
        ]),
        section("Limitation of Liability", &[
            "Our services are provided 'as is' without warranties of any kind, either express or implied.",
            "In no event shall Mitchy be liable for any indirect, incidental, special, consequential, or punitive damages arising out of or related to your use of our services.",
            "Our total liability for any claims arising from your use of the service shall not exceed the amount you paid us in the twelve months prior to the claim.",
        ]),
        section("Governing Law", &[
            "These Terms shall be governed by and construed in accordance with the laws of the jurisdiction in which Mitchy operates, without regard to its conflict of law provisions.",
            "Any disputes arising from these terms or your use of our services shall be resolved through binding arbitration.",
        ]),
    ],
    questions_heading: "Questions about our terms?",
    questions_text: "If you have any questions about these Terms of Service, please contact our team.",
};

pub static LICENSE: LegalDocument = LegalDocument {
    title: "License",
    last_updated: None,
    intro: None,
    sections: &[
        section("Website License", &[
            "All content on this website, including but not limited to text, graphics, logos, images, and software, is the property of Mitchy or its content suppliers and is protected by international copyright laws.",
            "Unless otherwise stated, Mitchy and/or its licensors own the intellectual property rights for all material on this website. All intellectual property rights are reserved.",
        ]),
        section("Client Work License", &[
            "Upon full payment, clients receive full ownership and commercial rights to deliverables created specifically for their project. This includes designs, code, and other creative assets as outlined in the project agreement.",
            "Mitchy retains the right to display completed client work in portfolios, case studies, and marketing materials unless explicitly restricted by a non-disclosure agreement.",
        ]),
        PolicySection {
            title: "Third-Party Licenses",
            paragraphs: &[
                "This website uses various open-source libraries and frameworks. We are grateful to the open-source community for their contributions:",
            ],
            bullets: &[
                "Yew - MIT/Apache-2.0 License",
                "axum - MIT License",
                "Tokio - MIT License",
                "Images from Unsplash - Unsplash License",
            ],
        },
    ],
    questions_heading: "Questions about licensing?",
    questions_text: "Contact our team for clarification on any licensing matters.",
};
