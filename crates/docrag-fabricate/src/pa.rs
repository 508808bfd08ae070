use crate::{Jurisdiction, SampleDocument, Section};

const PRINCIPAL: &str = "Margaret A. Whitfield";
const SIGNED: &str = "March 15, 2025";

pub(crate) fn durable_power_of_attorney() -> SampleDocument {
    SampleDocument {
        file_name: "PA_Durable_Power_of_Attorney.md",
        title: "Durable General Power of Attorney",
        jurisdiction: Jurisdiction::Pennsylvania,
        principal: PRINCIPAL,
        signed_on: SIGNED,
        preamble: "Commonwealth of Pennsylvania. Pursuant to 20 Pa.C.S. Chapter 56.",
        sections: vec![
            Section::new("Notice", &[
                "THE PURPOSE OF THIS POWER OF ATTORNEY IS TO GIVE THE PERSON YOU DESIGNATE (YOUR \"AGENT\") BROAD POWERS TO HANDLE YOUR PROPERTY, WHICH MAY INCLUDE POWERS TO PLEDGE, SELL, OR OTHERWISE DISPOSE OF ANY REAL OR PERSONAL PROPERTY WITHOUT ADVANCE NOTICE TO YOU OR APPROVAL BY YOU.",
                "YOUR AGENT MAY EXERCISE THE POWERS GIVEN HERE THROUGHOUT YOUR LIFETIME, EVEN AFTER YOU BECOME INCAPACITATED, UNLESS YOU EXPRESSLY LIMIT THE DURATION OF THESE POWERS OR YOU REVOKE THESE POWERS OR A COURT ACTING ON YOUR BEHALF TERMINATES OR MODIFIES YOUR AGENT'S AUTHORITY.",
                "YOUR AGENT MUST ACT IN ACCORDANCE WITH YOUR REASONABLE EXPECTATIONS TO THE EXTENT ACTUALLY KNOWN BY YOUR AGENT AND, OTHERWISE, IN YOUR BEST INTEREST, ACT IN GOOD FAITH AND ACT ONLY WITHIN THE SCOPE OF AUTHORITY GRANTED BY YOU IN THIS POWER OF ATTORNEY.",
            ]),
            Section::new("Article I: Designation of Principal and Agent", &[
                "I, Margaret A. Whitfield, of 742 Elmhurst Drive, Apt. 3B, Philadelphia, Pennsylvania 19103, born on June 14, 1958, being of sound mind and under no constraint or undue influence, do hereby appoint the following individual as my Attorney-in-Fact (my \"Agent\").",
                "Primary Agent: Robert J. Whitfield (Son), 1584 Oakmont Boulevard, Pittsburgh, Pennsylvania 15213, telephone (412) 555-0193.",
                "Successor Agent: if my Primary Agent is unable or unwilling to serve or continue to serve, I designate Patricia L. Donovan (Daughter), 239 Cherry Lane, Harrisburg, Pennsylvania 17101, telephone (717) 555-0847.",
            ]),
            Section::new("Article II: Durability Provision", &[
                "Pursuant to 20 Pa.C.S. Section 5604, this Power of Attorney is DURABLE and shall not be affected by my subsequent disability, incapacity, or incompetence. It shall remain in full force and effect until my death or until I revoke it in writing, or until a court of competent jurisdiction modifies or terminates the authority granted herein. This Power of Attorney shall be effective immediately upon execution.",
            ]),
            Section::new("Article III: Powers Granted", &[
                "I grant my Agent general authority to act for me with respect to the following subjects as defined in 20 Pa.C.S. Section 5602:",
                "(A) Real Property Transactions. To buy, sell, lease, exchange, mortgage, grant options, collect rent, and in all ways manage my real property, including the residential property at 742 Elmhurst Drive, Philadelphia, PA 19103.",
                "(B) Tangible Personal Property Transactions. To buy, sell, lease, exchange, and otherwise manage my vehicles, furniture, equipment, and personal effects.",
                "(C) Stock, Bond, and Securities Transactions. To buy, sell, exchange, and manage stocks, bonds, mutual funds, and other securities held in any brokerage or investment account in my name.",
                "(D) Banking and Financial Institution Transactions. To open and close accounts, make deposits and withdrawals, write checks, access safe deposit boxes, and obtain loans or lines of credit on my behalf.",
                "(E) Insurance and Annuity Transactions. To purchase, modify, surrender, collect benefits from, and make claims under any insurance policy or annuity contract.",
                "(F) Retirement Plan Transactions. To contribute to, withdraw from, and manage all retirement plans, pensions, IRAs, and 401(k) plans.",
                "(G) Tax Matters. To prepare, sign, file, and amend federal, state, and local tax returns, contest assessments, and claim refunds on my behalf.",
                "(H) Government Benefits. To apply for and maintain eligibility for Social Security, Medicare, Medicaid, Veterans Affairs benefits, and other programs.",
                "(I) Legal Actions and Proceedings. To initiate, defend, or settle legal, administrative, or arbitration proceedings and to retain counsel as necessary.",
                "(J) Personal and Family Maintenance. To pay for my personal care, support, and maintenance, and that of my dependents, from my assets.",
            ]),
            Section::new("Article IV: Special Instructions and Limitations", &[
                "(1) My Agent shall not have the authority to make gifts of my property exceeding $5,000 per recipient per calendar year, subject to the limitations of 20 Pa.C.S. Section 5601.2.",
                "(2) My Agent shall not change any beneficiary designation on my life insurance policies or retirement accounts, except to name my grandchildren as contingent beneficiaries.",
                "(3) My Agent shall maintain detailed records of all transactions conducted on my behalf and shall provide an accounting to my Successor Agent or to any court of competent jurisdiction upon request.",
                "(4) My Agent shall not use my assets for the Agent's personal benefit, except as reasonable compensation for services rendered, not to exceed $500 per month.",
            ]),
            Section::new("Article V: Third-Party Reliance", &[
                "Any third party who receives a copy of this Power of Attorney may rely upon it. Revocation is not effective as to a third party until the third party has actual knowledge of the revocation.",
            ]),
            Section::new("Article VI: Guardian Nomination", &[
                "If a court decides that it is necessary to appoint a guardian of my estate or of my person, I nominate my Agent, Robert J. Whitfield. If he is unable or unwilling to serve, I nominate Patricia L. Donovan.",
            ]),
            Section::new("Article VII: Revocation", &[
                "I reserve the right to revoke this Power of Attorney at any time by written notice to my Agent and to any third parties who may have received a copy, subject to the protections afforded to third parties under 20 Pa.C.S. Section 5608.",
            ]),
            Section::new("Execution", &[
                "IN WITNESS WHEREOF, I have hereunto set my hand this 15th day of March, 2025, before two adult witnesses and a notary public of the Commonwealth of Pennsylvania.",
            ]),
        ],
    }
}

pub(crate) fn healthcare_power_of_attorney() -> SampleDocument {
    SampleDocument {
        file_name: "PA_Healthcare_Power_of_Attorney.md",
        title: "Health Care Power of Attorney",
        jurisdiction: Jurisdiction::Pennsylvania,
        principal: PRINCIPAL,
        signed_on: SIGNED,
        preamble: "Commonwealth of Pennsylvania. Pursuant to 20 Pa.C.S. Chapter 54.",
        sections: vec![
            Section::new("Part I: Appointment of Health Care Agent", &[
                "I, Margaret A. Whitfield, of 742 Elmhurst Drive, Apt. 3B, Philadelphia, Pennsylvania 19103, born June 14, 1958, being of sound mind, willfully and voluntarily appoint the following person as my Health Care Agent.",
                "Health Care Agent: Patricia L. Donovan (Daughter), 239 Cherry Lane, Harrisburg, Pennsylvania 17101, telephone (717) 555-0847.",
                "Alternate Health Care Agent: Robert J. Whitfield (Son), 1584 Oakmont Boulevard, Pittsburgh, Pennsylvania 15213, telephone (412) 555-0193.",
            ]),
            Section::new("Part II: Authority Granted", &[
                "I grant my Health Care Agent full authority to make any and all health care decisions on my behalf, including the following:",
                "(a) To consent to, refuse, or withdraw consent to any medical treatment, surgical procedure, diagnostic test, or therapeutic intervention, including experimental treatments.",
                "(b) To authorize my admission to or discharge from any hospital, nursing home, assisted living facility, rehabilitation center, hospice, or other medical facility.",
                "(c) To access, obtain copies of, and authorize the release of my medical records and personal health information, including information protected under HIPAA.",
                "(d) To retain and dismiss health care providers, physicians, nurses, therapists, and other medical professionals.",
                "(e) To authorize pain relief medication or palliative care, even if such treatment may hasten my death.",
                "(f) To make decisions regarding organ donation and the disposition of my remains after death.",
            ]),
            Section::new("Part III: Instructions and Wishes", &[
                "End-of-Life Care: If I have a terminal condition with no reasonable expectation of recovery, or if I am in a persistent vegetative state, I do NOT wish to be kept alive by artificial means, including mechanical ventilation, artificial nutrition and hydration, or cardiopulmonary resuscitation. I request that all comfort measures be provided.",
                "Pain Management: I wish to receive adequate pain medication to maintain my comfort, even if such medication may cloud my consciousness or hasten my death.",
                "Organ Donation: Upon my death, I wish to donate any usable organs and tissues for transplantation and medical research.",
                "Religious Considerations: I am of the Roman Catholic faith. My Health Care Agent should prioritize the medical guidance above, which reflects my personal wishes after careful consideration.",
            ]),
            Section::new("Part IV: Effective Date and Durability", &[
                "This Health Care Power of Attorney becomes effective upon a determination by my attending physician that I am unable to make or communicate health care decisions for myself. It is durable and shall not be affected by my subsequent disability or incapacity. It remains in effect until I revoke it in writing or by oral declaration in the presence of two witnesses.",
            ]),
            Section::new("Part V: HIPAA Authorization", &[
                "I intend for my Health Care Agent to be treated as I would be with respect to my rights regarding the use and disclosure of my individually identifiable health information and other medical records.",
            ]),
            Section::new("Execution", &[
                "Signed on March 15, 2025 in the presence of two adult witnesses, neither of whom is my Health Care Agent.",
            ]),
        ],
    }
}
