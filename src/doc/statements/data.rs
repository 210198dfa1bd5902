/*!
# `DATA <expression>[,<expression>]`

## Purpose
Holds values for `READ`.

## Remarks
`DATA` does nothing when it runs. Items are checked when the line is
typed but only evaluated when `READ` reaches them, so they may be any
expression. A `DATA` line holds nothing but its items.

## Example
```text
10 READ A$
20 READ B
30 PRINT A$;B
40 DATA "NUGGET",1+2
RUN
NUGGET3
0/40
```

*/
