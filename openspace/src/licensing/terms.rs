//! End User Terms of Use of the OS OpenSpace service. Applications showing OpenSpace tiles must
//! make them available to their users.

use super::escape_html;

/// Part of the terms document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Block {
    /// Heading with its HTML level, from 3 (title) to 5.
    Heading(u8, &'static str),
    /// Paragraph set in bold.
    Strong(&'static str),
    Paragraph(&'static str),
}

impl Block {
    pub fn text(&self) -> &'static str {
        match self {
            Self::Heading(_, text) | Self::Strong(text) | Self::Paragraph(text) => text,
        }
    }

    fn html(&self) -> String {
        let text = escape_html(self.text()).replace("Ordnance Survey", "Ordnance&nbsp;Survey");
        match self {
            Self::Heading(level, _) => format!("<h{level}>{text}</h{level}>"),
            Self::Strong(_) => format!("<p><strong>{text}</strong></p>"),
            Self::Paragraph(_) => format!("<p>{text}</p>"),
        }
    }
}

pub const TERMS: &[Block] = &[
    Block::Heading(3, "End User Terms of Use (Terms of Use)"),
    Block::Strong("Your use of the Application is governed by this agreement between ‘you’ and the Developer (the ‘End User Terms of Use (Terms of Use)’) Please read these Terms of Use and ensure that you have understood them. If you do not agree to these Terms of Use, please immediately stop using the Application, including the Ordnance Survey Data."),
    Block::Heading(4, "Background"),
    Block::Paragraph("A The Developer has created an Application using the OpenSpace API and/or an OpenSpace SDK. The Application consists of, and allows you to access and use, a feed of Ordnance Survey mapping data via the use of a unique API key embedded in the Application."),
    Block::Paragraph("B These Terms of Use govern your use of the Ordnance Survey Data and related services provided by Ordnance Survey through the delivery of the Application. These Terms of Use do not cover the Application itself or any content/data of the Developer or third parties, which shall be governed by the Developer’s own terms."),
    Block::Heading(4, "1 Definitions"),
    Block::Paragraph("‘Application’ means an application(s) developed by the Developer using the OpenSpace API which is designed to access and use the Ordnance Survey Data via the internet which must be publicly accessible on the internet and must not be restricted, in whole or part, by firewall or otherwise, nor operate only on an internal network;"),
    Block::Paragraph("‘Caching’ means the automatic, immediate download and temporary storage of data, where such download and storage is an integral and essential part of a technological process, such storage to be no longer than 24 hours;"),
    Block::Paragraph("‘Data’ means any text, graphics, audio, visual (including still visual images) and/or audio visual material, software, applications, data, database content or other multimedia content, information and material;"),
    Block::Paragraph("‘Derived Data’ means any and all Data that is created by you through your use of the Application(s) which substantially reproduces and/or which is adapted, extracted, reutilized or derived directly or indirectly from Ordnance Survey Data. By way of example, but without limitation, Derived Data would include any Data created by you identifying the location or other attribute of any new feature directly using Ordnance Survey Data or a feature already present in Ordnance Survey Data and shall include Waypoints and User Generated Routes;"),
    Block::Paragraph("‘Developer’ means the person or entity issuing the Application to the general public;"),
    Block::Paragraph("‘End Users’ means the persons using the Application including you; and ‘End User’ shall be construed accordingly;"),
    Block::Paragraph("‘End User’s Data’ means any Data that you display or otherwise provide to the Application which you own, or which you are licensed by a third party to use (under terms which are consistent with the terms of these Terms of Use). However, End User’s Data does not include Derived Data that you own pursuant to Clause 2.3(a). By way of example, but without limitation, End User’s Data would include any independently sourced GPS trace plotted by you on the Application;"),
    Block::Paragraph("‘Financial Gain’ means any payment, revenue, credit, or money’s worth received by, or accruing to the Developer, you (or any third party used by or connected to Developer or you) (directly or indirectly) for: (i) accessing and using the Application; and/or (ii) viewing, downloading, using or exploiting any Ordnance Survey Data (or Derived Data owned by Ordnance Survey);"),
    Block::Paragraph("‘Intellectual Property Rights or IPR’ means copyright, patent, trade mark, design right, database rights, trade secrets, know how, rights of confidence, broadcast rights and all other similar rights anywhere in the world whether or not registered and including applications for registration of any of them;"),
    Block::Paragraph("‘OpenSpace API’ means the JavaScript application programming interface created by Ordnance Survey to allow developers to build applications using Ordnance Survey mapping data (which consists of the OpenSpace JavaScript Libraries and various open source software), as such may be amended from time to time;"),
    Block::Paragraph("‘OpenSpace SDK’ means one of the mapping data software development kits created and made available by Ordnance Survey and licensed under an open source licence, the terms of which are located at the following url: https://github.com/OrdnanceSurvey;"),
    Block::Paragraph("‘Open Space JavaScript Library (Libraries)’ means a proprietary JavaScript library created by Ordnance Survey and supplied to the Developer as part of the OpenSpace API, which Ordnance Survey licenses pursuant to the BSD open source licence, as such may be amended from time to time;"),
    Block::Paragraph("‘Ordnance Survey Data’ means Data owned by or licensed to Ordnance Survey (including as applicable Derived Data), a feed of which is made available by OS OpenSpace, which may be accessed and processed by the Application;"),
    Block::Paragraph("‘OS OpenSpace or OS OpenSpace Service’ means the services provided by Ordnance Survey through which the Developer and/or End Users, can access a feed of Ordnance Survey Data through the OpenSpace API;"),
    Block::Paragraph("‘Screen Shot’ means a screen shot, capture or grab of a complete page from the Application which includes a visible map image of Ordnance Survey Data. For the avoidance of doubt, the map image must not be provided as a download."),
    Block::Paragraph("‘User Generated Route’ means a course between a start location and a destination that is manually created by End User selecting and identifying a series of Waypoints on the Application, each of which Waypoints is joined by a straight line to the next Waypoint in the series and in the order that an End User would wish to travel; and"),
    Block::Paragraph("‘Waypoint’ means a point of reference selected by an End User using the Application, which consists merely of a set of co-ordinates that identify the point in physical space."),
    Block::Heading(4, "2 Proprietary Rights, Licence and Restrictions"),
    Block::Heading(5, "2.1 Ownership of Intellectual Property"),
    Block::Paragraph("The Crown (or where applicable Ordnance Survey’s suppliers) owns the Intellectual Property Rights in the Ordnance Survey Data which is made available to End Users through and/or as part of the Application. The End User acknowledges and agrees that these Terms of Use conveys a limited right to use the Ordnance Survey Data and does not convey title or ownership to the Ordnance Survey Data to the End User."),
    Block::Heading(5, "2.2 Licence Grant"),
    Block::Paragraph("The Developer grants to End Users a personal, non-exclusive, non-transferable, licence solely for the End User’s own personal, non commercial use (terminable at will and without any right to sublicense) to:"),
    Block::Paragraph("a) request from Ordnance Survey’s server the Ordnance Survey Data and view, use, and display the same through and as part of the Application on/from a single computer (including hand held), or mobile or GPS device;"),
    Block::Paragraph("b) create Waypoints and/or User Generated Routes through and as part of the Application and view and download Waypoints and/or User Generated Routes on and to a single computer (including hand-held) or GPS device;"),
    Block::Paragraph("c) print:"),
    Block::Paragraph("i) a maximum of ten (10) paper copies no greater than A4 (625 cm2) in size of any Screen Shot for the End-User’s personal or non-commercial use."),
    Block::Paragraph("ii) more than ten (10) paper copies, no greater than A4 (625cm2) in size of any Screen Shot for use in presentations given by the End User where the purpose is to provide a single copy of the Screen Shot to each participant of a presentation given by the End User."),
    Block::Paragraph("provided that:"),
    Block::Paragraph("i) The OS OpenSpace logo and copyright acknowledgement form part of the map image; and"),
    Block::Paragraph("ii) The Screen Shot includes content emanating from the Application and is not solely a map image."),
    Block::Paragraph("For the avoidance of doubt, for all other publications of Screen Shots, an appropriate licence is required."),
    Block::Heading(5, "2.3 Derived Data"),
    Block::Paragraph("a) In the event that any End User creates Derived Data, End User acknowledges and agrees that such Derived Data shall automatically be assigned immediately on creation to Ordnance Survey, save that if any Derived Data is created by any End User which is a severable improvement (as defined by Commission Regulation (EC) No 772/2004, known as the Technology Transfer Block Exemption) of the Ordnance Survey Data then such Derived Data shall be owned by the End User."),
    Block::Paragraph("b) In respect of any Derived Data Ordnance Survey owns pursuant to Clause 2.3(a) above, then subject to all of these Terms of Use, but without prejudice to Clause 2.2(b), the Developer hereby grants End User a perpetual, non exclusive, royalty-free, paid up, personal licence to use and display such Derived Data as part of the Application used to create the same."),
    Block::Paragraph("c) In respect of any Derived Data an End User owns pursuant to Clause 2.3(a) above, then for the period during which End User submits, posts, or displays such Derived Data on the Application, End User, or Developer (as the case may be), grants to Ordnance Survey a revocable, world-wide, royalty-free, and non-exclusive licence to use, display and distribute such Derived Data solely for the purpose of allowing: (i) Ordnance Survey to deliver the OS OpenSpace service to the Developer and End Users; and (ii) Developer to deliver the Application to End Users. Such licence will terminate immediately the End User and/or the Developer (as the case may be) ceases to use the Application to submit, post or display such Derived Data, and/or the Developer ceases to deliver the Application."),
    Block::Heading(5, "2.4 End User’s Data"),
    Block::Paragraph("In the event that End User submits, posts and displays End User’s Data in or to the Application:"),
    Block::Paragraph("a)Ordnance Survey does not claim any ownership in such End User’s Data. However, for the period during which End User submits, posts, or displays such End User’s Data on the Application, End User, or Developer (as the case may be), grants to Ordnance Survey a revocable, world-wide, royalty-free, and non-exclusive licence to use, display and distribute such End User’s Data solely for the purpose of allowing (i) Ordnance Survey to deliver the OS OpenSpace service to the Developer and End Users; and (ii) Developer to deliver the Application to End Users. Such licence will terminate immediately the End User and/or Developer ceases to use the Application to submit, post or display such End User’s Data, and/or the Developer ceases to deliver the Application;"),
    Block::Paragraph("b)End User hereby warrants to Ordnance Survey that End User has all the necessary permissions and authorisations from the owners of any Intellectual Property Rights subsisting in the End User’s Data to use and grant licenses to use such Intellectual Property Rights under these Terms of Use."),
    Block::Strong("2.5 Restrictions"),
    Block::Paragraph("Except as expressly permitted under these Terms of Use, the licences granted in Clauses 2.2 – 2.3 above are subject to End User complying with the following conditions."),
    Block::Paragraph("a) End User shall not submit, post or display any advertising that, in the reasonable opinion of Ordnance Survey, may be (i) illegal, deceptive, misleading, unethical or otherwise inappropriate, or (ii) may be associated with any of the foregoing or otherwise inappropriate goods or services on or to the Application;"),
    Block::Paragraph("b) End User shall not use the Application for, or in connection with, any Financial Gain;"),
    Block::Paragraph("c) Subject to Clause 2.2(b) above and Sub-Clauses 2.5(d) below, End User shall not download, store, and/or archive the Ordnance Survey Data, in whole or in part on to a single computer (including hand held), or mobile or GPS device, save for Caching;"),
    Block::Paragraph("d) End User shall not tamper with or remove any copyright, trade mark, trade mark symbol or other proprietary notice of Ordnance Survey or its licensors affixed to, or contained in the Ordnance Survey Data."),
    Block::Paragraph("All rights and permissions not expressly set out in this Clause 2 are expressly excluded."),
    Block::Heading(4, "3 Limited Warranty; Disclaimer of Warranty"),
    Block::Heading(5, "3.1 Exclusions"),
    Block::Paragraph("No warranty is given that the Ordnance Survey Data shall meet End User’s particular requirements, whether operationally, functionally, accurately or otherwise, or that the Ordnance Survey Data shall be suitable for the End User’s intended purpose or that operation of the Ordnance Survey Data shall be uninterrupted or error free. Under no circumstances shall Ordnance Survey or its licensors be liable for any loss or corruption of End User’s data."),
    Block::Heading(5, "3.2 Disclaimer of Warranties"),
    Block::Paragraph("Ordnance Survey and its licensors disclaim all warranties and conditions, either express or implied, with respect to the Ordnance Survey Data and further disclaim any warranty that the functions contained in the Ordnance Survey Data shall meet End User’s requirements or shall operate in combinations or in a manner selected for use by End User, or that the operation and/or provision of the Ordnance Survey Data shall be uninterrupted or error free."),
    Block::Heading(4, "4 Limitation of Liability"),
    Block::Heading(5, "4.1 Limitation of Liability"),
    Block::Paragraph("Save in respect of death or personal injury to the extent it results from negligence or fraud, Ordnance Survey and its licensors disclaim all liability whether in contract, tort (including negligence) or otherwise for any loss or damage of whatsoever nature arising from any use of the Ordnance Survey Data or from any interruption or failure of any electronic transmission of Ordnance Survey Data."),
    Block::Heading(5, "4.2 Exclusion of Consequential Damages"),
    Block::Paragraph("Under no circumstances shall Ordnance Survey and its licensors be liable (i) for costs of procurement of substitute products by End User; and (ii) in contract, tort (including negligence) or otherwise for any direct, indirect, special or consequential losses or damages, or any loss of profits, loss of business or loss of contracts."),
    Block::Heading(5, "4.3 Remedies of Ordnance Survey"),
    Block::Paragraph("Ordnance Survey and/or its licensors may directly recover from the End User all amounts lawfully due in respect of any breaches of these Terms of Use by the End User (including but without limitation a breach of Clause 2.4) which cause Ordnance Survey to suffer loss or damage."),
    Block::Heading(4, "5 Data Protection"),
    Block::Heading(5, "5.1 Data Protection"),
    Block::Paragraph("The Developer shall protect the End User’s personal data in accordance with all applicable legislation."),
    Block::Heading(4, "6 Termination"),
    Block::Heading(5, "6.1 Termination"),
    Block::Paragraph("The Developer has the right to terminate End User’s use of the Application and/or the Ordnance Survey Data (but not the Derived Data owned by the End User pursuant to Clause 2.3(a)) immediately on notice to the End User. On termination of these Terms of Use, the licences granted to the End User herein shall terminate immediately and the End User shall take all steps reasonably possible to return or destroy the relevant Ordnance Survey Data."),
    Block::Heading(4, "7 Other Terms"),
    Block::Heading(5, "7.1 Compliance with Laws"),
    Block::Paragraph("The End User shall comply with all applicable local and foreign laws and regulations which may govern the use of the Ordnance Survey Data and use the Ordnance Survey Data only for lawful purposes and in accordance with these Terms of Use. End User acknowledges that the Developer and its licensors exercise no control whatsoever over the Ordnance Survey Data and that it is the sole responsibility of End User to ensure that any content End User transmits and receives by means of the Application and/or the Ordnance Survey Data complies with all applicable laws."),
    Block::Heading(5, "7.2 Survival"),
    Block::Paragraph("Clauses 1, 2.1, 2.3(a), 2.4(b), 3, 4, 7.2 and 7.3 inclusive shall survive termination of these Terms of Use for any reason."),
    Block::Heading(5, "7.3 Governing Law and Jurisdiction"),
    Block::Paragraph("These Terms of Use shall be governed by and construed in accordance with English law and the parties submit to the exclusive jurisdiction of the English courts in respect of any proceedings issued by any party in connection with these Terms of Use"),
];

/// Title of the document, i.e. its first heading.
pub fn title() -> &'static str {
    TERMS.first().map(Block::text).unwrap_or_default()
}

/// The whole document as an HTML fragment, one block per line.
pub fn html() -> String {
    TERMS.iter().map(Block::html).collect::<Vec<_>>().join("\n")
}
