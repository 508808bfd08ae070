use crate::{Jurisdiction, SampleDocument, Section};

const PRINCIPAL: &str = "Thomas R. Castellano";
const SIGNED: &str = "January 22, 2025";

pub(crate) fn statutory_property() -> SampleDocument {
    SampleDocument {
        file_name: "IL_Statutory_Short_Form_POA_Property.md",
        title: "Illinois Statutory Short Form Power of Attorney for Property",
        jurisdiction: Jurisdiction::Illinois,
        principal: PRINCIPAL,
        signed_on: SIGNED,
        preamble: "Statutory Short Form Power of Attorney for Property Law, 755 ILCS 45/3-3.",
        sections: vec![
            Section::new("Notice", &[
                "PLEASE READ THIS NOTICE CAREFULLY. The form that you will be signing is a legal document. It is governed by the Illinois Power of Attorney Act. The person you designate as your agent will have broad powers to make decisions for you with respect to your property, including the power to spend your money and sell or dispose of your property during your lifetime without telling you.",
            ]),
            Section::new("1. Appointment", &[
                "I, Thomas R. Castellano, residing at 2847 North Lakewood Avenue, Chicago, Illinois 60614, hereby revoke all prior statutory powers of attorney for property executed by me and appoint:",
                "Agent: Maria E. Castellano (Spouse), 2847 North Lakewood Avenue, Chicago, Illinois 60614, telephone (312) 555-0726,",
                "as my attorney-in-fact (my \"agent\") to act for me and in my name with respect to the powers defined in Section 3-4 of the Statutory Short Form Power of Attorney for Property Law (755 ILCS 45/3-4), subject to the limitations in paragraph 3 below.",
            ]),
            Section::new("2. Powers Granted", &[
                "None of the following categories of powers have been struck out: (a) real estate transactions; (b) financial institution transactions; (c) stock and bond transactions; (d) tangible personal property transactions; (e) safe deposit box transactions; (f) insurance and annuity transactions; (g) retirement plan transactions; (h) Social Security, employment, and military service benefits; (i) tax matters; (j) claims and litigation; (k) commodity and option transactions; (l) business operations transactions; (m) borrowing transactions; (n) estate transactions.",
            ]),
            Section::new("3. Limitations on and Additions to the Agent's Powers", &[
                "(i) My Agent may make gifts of my property to my spouse, children, and grandchildren in amounts not exceeding $3,000 per person per calendar year, provided that such gifts do not impair my ability to meet my own financial needs and obligations.",
                "(ii) My Agent shall not change the beneficiary designations on any life insurance policy or retirement account without my prior written consent, unless I am incapacitated at the time.",
                "(iii) My Agent shall deposit all funds collected on my behalf into my primary checking account at First National Bank of Illinois, account number ending in 7842.",
            ]),
            Section::new("4. Successor Agent", &[
                "If my Agent named above is unable or unwilling to serve or continue to serve, I appoint Anthony D. Castellano (Brother), 519 West Barry Avenue, Unit 4, Chicago, Illinois 60657, telephone (312) 555-1394, as my Successor Agent.",
                "Second Successor Agent: Lisa K. Ferraro (Sister), 1205 South Ridgeland Avenue, Oak Park, Illinois 60302, telephone (708) 555-0215.",
            ]),
            Section::new("5. Effective Date and Durability", &[
                "This Power of Attorney is effective immediately and shall continue in force until my death or revocation, and shall not be affected by my disability or incapacity. This is a durable power of attorney under 755 ILCS 45/2-5.",
            ]),
            Section::new("Execution", &[
                "I, Thomas R. Castellano, the Principal, sign my name to this Statutory Short Form Power of Attorney for Property on January 22, 2025, and declare that I sign it willingly as my free and voluntary act, in the presence of one witness and a notary public of Cook County, Illinois.",
            ]),
            Section::new("Notice to Agent", &[
                "When you accept the authority granted under this power of attorney, a special legal relationship is created between you and the principal. You must act in good faith for the benefit of the principal, keep the principal's property separate from your own, and keep a record of all receipts, disbursements, and significant actions taken as agent.",
            ]),
        ],
    }
}

pub(crate) fn statutory_healthcare() -> SampleDocument {
    SampleDocument {
        file_name: "IL_Statutory_Short_Form_POA_Healthcare.md",
        title: "Illinois Statutory Short Form Power of Attorney for Health Care",
        jurisdiction: Jurisdiction::Illinois,
        principal: PRINCIPAL,
        signed_on: SIGNED,
        preamble: "Illinois Power of Attorney Act, 755 ILCS 45/4-10.",
        sections: vec![
            Section::new("1. Appointment", &[
                "I, Thomas R. Castellano, residing at 2847 North Lakewood Avenue, Chicago, Illinois 60614, hereby revoke all prior powers of attorney for health care executed by me and appoint:",
                "Health Care Agent: Maria E. Castellano (Spouse), 2847 North Lakewood Avenue, Chicago, Illinois 60614, telephone (312) 555-0726,",
                "as my agent to make any and all decisions for me concerning my personal care, medical treatment, hospitalization, and health care, and to require, withhold, or withdraw any type of medical treatment or procedure, even though my death may ensue. My agent shall have the same access to my medical records that I have, including information governed by HIPAA.",
            ]),
            Section::new("2. Successor Agent", &[
                "If the agent named above is unable or unwilling to serve, I appoint Lisa K. Ferraro (Sister), 1205 South Ridgeland Avenue, Oak Park, Illinois 60302, telephone (708) 555-0215, as my Successor Health Care Agent.",
            ]),
            Section::new("3. Specific Instructions and Limitations", &[
                "End-of-Life Decisions: (a) If I am suffering from a terminal condition with no reasonable chance of recovery and am unable to communicate my wishes, I direct my agent to refuse or withdraw all life-sustaining treatment, including artificial nutrition and hydration, mechanical ventilation, and dialysis. I request that comfort care and pain management be provided. (b) If I am in a persistent vegetative state or irreversible coma, I direct my agent to refuse or withdraw all life-sustaining treatment.",
                "Organ and Tissue Donation: (c) Upon my death, I authorize the donation of my organs and tissues for transplantation, therapy, or medical research, in accordance with the Illinois Revised Uniform Anatomical Gift Act (755 ILCS 50/).",
                "Disposition of Remains: (d) I direct that my remains be cremated and my ashes interred at Holy Sepulchre Cemetery in Alsip, Illinois, in the Castellano family plot, pursuant to the Disposition of Remains Act, 755 ILCS 65/1 et seq.",
                "Mental Health Treatment: (e) My agent may consent to mental health treatment and access my mental health records, but may NOT consent to my admission to a mental health facility for more than 17 days, nor to electroconvulsive therapy, psychosurgery, or other experimental procedures without a court order.",
                "Additional Wishes: (f) I wish to be treated at Northwestern Memorial Hospital in Chicago whenever reasonably feasible. My primary care physician is Dr. Sarah M. Peterson. (g) If I am near death, I request that a Catholic priest from St. Alphonsus parish be contacted to administer the Sacrament of the Anointing of the Sick.",
            ]),
            Section::new("4. Effective Date and Durability", &[
                "This Power of Attorney for Health Care shall be effective upon my inability to make or communicate health care decisions, as determined by my attending physician. It is durable and shall not be affected by my disability or incapacity.",
            ]),
            Section::new("5. Revocation", &[
                "I understand that I have the right to revoke this Power of Attorney at any time by communicating my intent to revoke to my agent and/or my attending physician, either in writing or by any other means.",
            ]),
            Section::new("Execution", &[
                "I, Thomas R. Castellano, the Principal, sign my name to this Statutory Short Form Power of Attorney for Health Care on January 22, 2025, in the presence of one adult witness who is not my agent or my attending physician.",
            ]),
        ],
    }
}
