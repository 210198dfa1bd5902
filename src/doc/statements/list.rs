/*!
# `LIST [<line number>]`

## Purpose
Shows the program.

## Remarks
The listing starts from `<line number>`, or from the beginning.
Keywords are spelled out with spaces around them. Pressing ENTER on
an empty line lists the whole program too.

## Example
```text
10 PRINT "HI"
20 GOTO 10
LIST 20
20 GOTO 10
0/0
```

*/
